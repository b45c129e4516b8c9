//! Function-pointer finite state machine engine for the panel screens.
//!
//! Classic embedded FSM pattern ported to Rust:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  StateTable                                                  │
//! │  ┌──────────┬───────────┬──────────┬───────────────────────┐ │
//! │  │ ScreenId │ on_enter  │ on_exit  │ on_intent             │ │
//! │  ├──────────┼───────────┼──────────┼───────────────────────┤ │
//! │  │ Boot     │ fn(ctx)   │ fn(ctx)  │ fn(ctx, i)->Option<>  │ │
//! │  │ Main     │ fn(ctx)   │ fn(ctx)  │ fn(ctx, i)->Option<>  │ │
//! │  │ Settings │ fn(ctx)   │ fn(ctx)  │ fn(ctx, i)->Option<>  │ │
//! │  │ Language │ fn(ctx)   │ fn(ctx)  │ fn(ctx, i)->Option<>  │ │
//! │  │ Owner    │ fn(ctx)   │ fn(ctx)  │ fn(ctx, i)->Option<>  │ │
//! │  └──────────┴───────────┴──────────┴───────────────────────┘ │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each intent is handed to `on_intent` of the **current** screen.  If it
//! returns `Some(next)`, the engine runs `on_exit` for the current screen,
//! then `on_enter` for the next, updates the current pointer and requests
//! a full repaint.  All functions receive `&mut UiContext`.

pub mod context;
pub mod states;

use context::UiContext;
use log::info;

use crate::gesture::{Gesture, KnobDirection};

// ---------------------------------------------------------------------------
// Screen identity
// ---------------------------------------------------------------------------

/// Enumeration of all screens.
/// Must stay in sync with the table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ScreenId {
    Boot = 0,
    Main = 1,
    Settings = 2,
    Language = 3,
    Owner = 4,
}

impl ScreenId {
    /// Total number of screens, used to size the table array.
    pub const COUNT: usize = 5;

    /// Convert an index back to `ScreenId`.  Panics on out-of-range in
    /// debug builds; returns `Main` in release.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Boot,
            1 => Self::Main,
            2 => Self::Settings,
            3 => Self::Language,
            4 => Self::Owner,
            _ => {
                debug_assert!(false, "invalid screen index: {idx}");
                Self::Main
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Intents
// ---------------------------------------------------------------------------

/// Everything a screen can react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    KnobStep(KnobDirection),
    SingleClick,
    TripleClick,
    LongPress,
    /// The boot splash timer fired.
    BootElapsed,
}

impl From<Gesture> for Intent {
    fn from(g: Gesture) -> Self {
        match g {
            Gesture::SingleClick => Self::SingleClick,
            Gesture::TripleClick => Self::TripleClick,
            Gesture::LongPress => Self::LongPress,
        }
    }
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Signature for `on_enter` and `on_exit` actions.
/// These run exactly once on each screen transition.
pub type StateActionFn = fn(&mut UiContext);

/// Signature for the intent handler.
/// Returns `Some(next)` to trigger a transition, or `None` to stay.
pub type StateIntentFn = fn(&mut UiContext, Intent) -> Option<ScreenId>;

// ---------------------------------------------------------------------------
// State descriptor (one row in the table)
// ---------------------------------------------------------------------------

/// Static descriptor for a single screen.
/// Stored in a fixed-size array: no heap, no `dyn`.
pub struct StateDescriptor {
    pub id: ScreenId,
    pub name: &'static str,
    pub on_enter: Option<StateActionFn>,
    pub on_exit: Option<StateActionFn>,
    pub on_intent: StateIntentFn,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// The screen state machine engine.
pub struct Fsm {
    /// Fixed-size table indexed by `ScreenId as usize`.
    table: [StateDescriptor; ScreenId::COUNT],
    /// Index of the currently active screen.
    current: usize,
}

impl Fsm {
    /// Construct a new FSM with the given table, starting in `initial`.
    pub fn new(table: [StateDescriptor; ScreenId::COUNT], initial: ScreenId) -> Self {
        Self {
            table,
            current: initial as usize,
        }
    }

    /// Run the initial `on_enter` for the starting screen.
    /// Call once after construction, before the first `dispatch()`.
    pub fn start(&mut self, ctx: &mut UiContext) {
        info!("FSM starting in screen: {}", self.table[self.current].name);
        ctx.state.screen = self.current_screen();
        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
        ctx.effects.repaint = true;
    }

    /// Hand one intent to the current screen.
    ///
    /// Returns `Some((from, to))` if the intent caused a transition.
    pub fn dispatch(&mut self, intent: Intent, ctx: &mut UiContext) -> Option<(ScreenId, ScreenId)> {
        let from = self.current_screen();
        let next = (self.table[self.current].on_intent)(ctx, intent)?;
        if next == from {
            return None;
        }
        self.transition(next, ctx);
        Some((from, next))
    }

    /// The current screen's identity.
    pub fn current_screen(&self) -> ScreenId {
        ScreenId::from_index(self.current)
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn transition(&mut self, next_id: ScreenId, ctx: &mut UiContext) {
        let next_idx = next_id as usize;

        info!(
            "FSM transition: {} -> {}",
            self.table[self.current].name, self.table[next_idx].name
        );

        // Exit current screen
        if let Some(exit) = self.table[self.current].on_exit {
            exit(ctx);
        }

        self.current = next_idx;
        ctx.state.screen = next_id;

        // Enter new screen
        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }

        // Entering a screen always redraws it in the current language.
        ctx.effects.repaint = true;
    }
}
