//! Concrete screen handler functions and table builder.
//!
//! Each screen is defined by plain `fn` pointers with no closures, no
//! dynamic dispatch, no heap.
//!
//! ```text
//!  BOOT ──[boot timer]──▶ MAIN ──[triple click]──▶ SETTINGS
//!                          ▲                         │  │
//!                          └──────[long press]───────┘  │
//!                                                       │ click (cursor 0 / 1)
//!                               ┌───────────────────────┴──────┐
//!                               ▼                              ▼
//!                           LANGUAGE                         OWNER
//!            [click: commit + persist | long: discard]   [Save: persist | long: discard]
//!                               └────────────▶ SETTINGS ◀──────┘
//! ```

use log::{debug, info};

use super::context::{SETTINGS_ENTRIES, UiContext, wrap_index};
use super::{Intent, ScreenId, StateDescriptor};
use crate::model::{Language, OwnerKey, OwnerName};

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static screen table.  Called once at startup.
pub fn build_state_table() -> [StateDescriptor; ScreenId::COUNT] {
    [
        // Index 0: Boot
        StateDescriptor {
            id: ScreenId::Boot,
            name: "Boot",
            on_enter: None,
            on_exit: None,
            on_intent: boot_intent,
        },
        // Index 1: Main
        StateDescriptor {
            id: ScreenId::Main,
            name: "Main",
            on_enter: Some(main_enter),
            on_exit: None,
            on_intent: main_intent,
        },
        // Index 2: Settings
        StateDescriptor {
            id: ScreenId::Settings,
            name: "Settings",
            on_enter: None,
            on_exit: None,
            on_intent: settings_intent,
        },
        // Index 3: Language
        StateDescriptor {
            id: ScreenId::Language,
            name: "Language",
            on_enter: Some(language_enter),
            on_exit: None,
            on_intent: language_intent,
        },
        // Index 4: Owner
        StateDescriptor {
            id: ScreenId::Owner,
            name: "Owner",
            on_enter: Some(owner_enter),
            on_exit: Some(owner_exit),
            on_intent: owner_intent,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  BOOT: splash until the boot timer fires
// ═══════════════════════════════════════════════════════════════════════════

fn boot_intent(_ctx: &mut UiContext, intent: Intent) -> Option<ScreenId> {
    match intent {
        Intent::BootElapsed => Some(ScreenId::Main),
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  MAIN: fan speed and lock
// ═══════════════════════════════════════════════════════════════════════════

fn main_enter(ctx: &mut UiContext) {
    info!(
        "MAIN: fan {}%{}",
        ctx.state.fan_percent,
        if ctx.state.locked { " (locked)" } else { "" }
    );
}

fn main_intent(ctx: &mut UiContext, intent: Intent) -> Option<ScreenId> {
    match intent {
        Intent::KnobStep(dir) => {
            if ctx.state.locked {
                debug!("MAIN: knob ignored while locked");
            } else if ctx.step_fan(dir.delta()) {
                ctx.effects.repaint = true;
            }
            None
        }
        Intent::SingleClick => {
            ctx.state.locked = !ctx.state.locked;
            ctx.effects.lock_changed = true;
            ctx.effects.repaint = true;
            None
        }
        Intent::TripleClick => Some(ScreenId::Settings),
        Intent::LongPress | Intent::BootElapsed => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  SETTINGS: two-entry menu
// ═══════════════════════════════════════════════════════════════════════════

fn settings_intent(ctx: &mut UiContext, intent: Intent) -> Option<ScreenId> {
    match intent {
        Intent::KnobStep(dir) => {
            ctx.state.settings_cursor =
                wrap_index(ctx.state.settings_cursor, dir.delta(), SETTINGS_ENTRIES);
            ctx.effects.repaint = true;
            None
        }
        Intent::SingleClick => match ctx.state.settings_cursor {
            0 => Some(ScreenId::Language),
            _ => Some(ScreenId::Owner),
        },
        Intent::LongPress => Some(ScreenId::Main),
        Intent::TripleClick | Intent::BootElapsed => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  LANGUAGE: roller over the supported languages
// ═══════════════════════════════════════════════════════════════════════════

fn language_enter(ctx: &mut UiContext) {
    ctx.state.language_roller = ctx.state.language.index();
}

fn language_intent(ctx: &mut UiContext, intent: Intent) -> Option<ScreenId> {
    match intent {
        Intent::KnobStep(dir) => {
            ctx.state.language_roller =
                wrap_index(ctx.state.language_roller, dir.delta(), Language::COUNT);
            ctx.effects.repaint = true;
            None
        }
        Intent::SingleClick => {
            let chosen = Language::from_index(ctx.state.language_roller);
            info!("LANGUAGE: {} -> {}", ctx.state.language, chosen);
            ctx.state.language = chosen;
            ctx.effects.persist_language = Some(chosen);
            Some(ScreenId::Settings)
        }
        Intent::LongPress => {
            debug!("LANGUAGE: selection discarded");
            Some(ScreenId::Settings)
        }
        Intent::TripleClick | Intent::BootElapsed => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  OWNER: character roller editing a draft of the owner name
// ═══════════════════════════════════════════════════════════════════════════

fn owner_enter(ctx: &mut UiContext) {
    ctx.state.owner_draft = ctx.state.owner_name.clone();
    ctx.state.owner_roller = 0;
}

fn owner_exit(ctx: &mut UiContext) {
    ctx.state.owner_draft = OwnerName::new();
}

fn owner_intent(ctx: &mut UiContext, intent: Intent) -> Option<ScreenId> {
    match intent {
        Intent::KnobStep(dir) => {
            ctx.state.owner_roller =
                wrap_index(ctx.state.owner_roller, dir.delta(), OwnerKey::COUNT);
            ctx.effects.repaint = true;
            None
        }
        Intent::SingleClick => match OwnerKey::from_index(ctx.state.owner_roller) {
            OwnerKey::Backspace => {
                if ctx.state.owner_draft.pop().is_some() {
                    ctx.effects.repaint = true;
                }
                None
            }
            OwnerKey::Save => {
                ctx.state.owner_name = ctx.state.owner_draft.clone();
                ctx.effects.persist_owner = true;
                info!("OWNER: name set to \"{}\"", ctx.state.owner_name);
                Some(ScreenId::Settings)
            }
            OwnerKey::Char(c) => {
                if ctx.state.owner_draft.push(c) {
                    ctx.effects.repaint = true;
                } else {
                    debug!("OWNER: name full, '{}' rejected", c);
                }
                None
            }
        },
        Intent::LongPress => {
            debug!("OWNER: edits discarded");
            Some(ScreenId::Settings)
        }
        Intent::TripleClick | Intent::BootElapsed => None,
    }
}
