//! Language-dependent captions.
//!
//! Every caption on every screen comes from [`captions`]; views are rebuilt
//! from the active language on each render, so a language change takes
//! effect on the next repaint without any widget bookkeeping.

use crate::model::Language;

/// All translatable strings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Captions {
    pub splash: &'static str,
    pub main_title: &'static str,
    pub fan: &'static str,
    pub locked: &'static str,
    pub settings_title: &'static str,
    pub language_entry: &'static str,
    pub owner_entry: &'static str,
    pub owner_hint: &'static str,
}

const ENGLISH: Captions = Captions {
    splash: "Fan Panel",
    main_title: "Fan",
    fan: "Speed",
    locked: "Locked",
    settings_title: "Settings",
    language_entry: "Language",
    owner_entry: "Owner",
    owner_hint: "Turn to pick, press to add",
};

const CHINESE: Captions = Captions {
    splash: "风扇面板",
    main_title: "风扇",
    fan: "转速",
    locked: "已锁定",
    settings_title: "设置",
    language_entry: "语言",
    owner_entry: "主人",
    owner_hint: "旋转选择，按下添加",
};

const JAPANESE: Captions = Captions {
    splash: "ファンパネル",
    main_title: "ファン",
    fan: "速度",
    locked: "ロック中",
    settings_title: "設定",
    language_entry: "言語",
    owner_entry: "所有者",
    owner_hint: "回して選択、押して追加",
};

const KOREAN: Captions = Captions {
    splash: "팬 패널",
    main_title: "팬",
    fan: "속도",
    locked: "잠김",
    settings_title: "설정",
    language_entry: "언어",
    owner_entry: "소유자",
    owner_hint: "돌려서 선택, 눌러서 추가",
};

const FRENCH: Captions = Captions {
    splash: "Panneau ventilateur",
    main_title: "Ventilateur",
    fan: "Vitesse",
    locked: "Verrouillé",
    settings_title: "Réglages",
    language_entry: "Langue",
    owner_entry: "Propriétaire",
    owner_hint: "Tournez pour choisir, appuyez pour ajouter",
};

const GERMAN: Captions = Captions {
    splash: "Lüfterpanel",
    main_title: "Lüfter",
    fan: "Drehzahl",
    locked: "Gesperrt",
    settings_title: "Einstellungen",
    language_entry: "Sprache",
    owner_entry: "Besitzer",
    owner_hint: "Drehen zum Wählen, Drücken zum Hinzufügen",
};

const SPANISH: Captions = Captions {
    splash: "Panel del ventilador",
    main_title: "Ventilador",
    fan: "Velocidad",
    locked: "Bloqueado",
    settings_title: "Ajustes",
    language_entry: "Idioma",
    owner_entry: "Propietario",
    owner_hint: "Gire para elegir, pulse para añadir",
};

const RUSSIAN: Captions = Captions {
    splash: "Панель вентилятора",
    main_title: "Вентилятор",
    fan: "Скорость",
    locked: "Заблокировано",
    settings_title: "Настройки",
    language_entry: "Язык",
    owner_entry: "Владелец",
    owner_hint: "Поверните для выбора, нажмите для добавления",
};

/// Caption table for `lang`.
pub fn captions(lang: Language) -> &'static Captions {
    match lang {
        Language::English => &ENGLISH,
        Language::Chinese => &CHINESE,
        Language::Japanese => &JAPANESE,
        Language::Korean => &KOREAN,
        Language::French => &FRENCH,
        Language::German => &GERMAN,
        Language::Spanish => &SPANISH,
        Language::Russian => &RUSSIAN,
    }
}
