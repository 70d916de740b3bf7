// src/translate.rs
//
// Localized (Russian) vocabulary of the ratings site mapped to canonical
// English. Static, read-only tables; pure string transforms over them.

use crate::ranks::Rank;

/// Localized → canonical term pairs, applied in order. Compound terms sit
/// before any term embedded in them, so e.g. "Сержант-майор" becomes
/// "Sergeant Major" and is never clipped to "Sergeant-майор" by the shorter
/// entry. `terms_ordering_is_safe` below enforces the invariant.
pub static TERMS: &[(&str, &str)] = &[
    // Compound ranks first
    ("Генералиссимус", "Generalissimo"),
    ("Генерал-майор", "Major General"),
    ("Генерал-лейтенант", "Lieutenant General"),
    ("Сержант-майор", "Sergeant Major"),
    ("Штаб-сержант", "Staff Sergeant"),
    ("Старший сержант", "Sergeant First Class"),
    ("Мастер-сержант", "Master Sergeant"),
    ("Первый сержант", "First Sergeant"),
    ("Уорэнт-офицер 1", "Warrant Officer 1"),
    ("Уорэнт-офицер 2", "Chief Warrant Officer 2"),
    ("Уорэнт-офицер 3", "Chief Warrant Officer 3"),
    ("Уорэнт-офицер 4", "Chief Warrant Officer 4"),
    ("Уорэнт-офицер 5", "Chief Warrant Officer 5"),
    ("Младший лейтенант", "Second Lieutenant"),
    ("Подполковник", "Lieutenant Colonel"),
    ("Фельдмаршал", "Field Marshal"),
    ("Легенда 2", "Legend 2"),
    ("Легенда 3", "Legend 3"),
    ("Легенда 4", "Legend 4"),
    ("Легенда 5", "Legend 5"),
    // Simple ranks
    ("Рекрут", "Recruit"),
    ("Рядовой", "Private"),
    ("Ефрейтор", "Gefreiter"),
    ("Капрал", "Corporal"),
    ("Сержант", "Sergeant"),
    ("Лейтенант", "First Lieutenant"),
    ("Капитан", "Captain"),
    ("Майор", "Major"),
    ("Полковник", "Colonel"),
    ("Бригадир", "Brigadier"),
    ("Генерал", "General"),
    ("Маршал", "Marshal"),
    ("Командующий", "Commander"),
    ("Легенда", "Legend"),
    // Group / clan terms
    ("Нет группы", "No Group"),
    ("Игрок", "Player"),
    ("Клан", "Clan"),
    ("Группа", "Group"),
    // General vocabulary
    ("Да", "Yes"),
    ("Нет", "No"),
    ("Неизвестно", "Unknown"),
    // Turrets
    ("Фриз", "Freeze"),
    ("Смоки", "Smoky"),
    ("Изида", "Isida"),
    ("Молот", "Hammer"),
    ("Твинс", "Twins"),
    ("Огнемет", "Flamethrower"),
    // Hulls
    ("Хантер", "Hunter"),
    ("Васп", "Wasp"),
    ("Диктатор", "Dictator"),
    ("Титан", "Titan"),
    ("Викинг", "Viking"),
    ("Хорнет", "Hornet"),
    // Paints
    ("Зелёный", "Green"),
    ("Праздник", "Holiday"),
    ("Премиум", "Premium"),
    ("Пижама", "Pajamas"),
    ("Граффити", "Graffiti"),
    ("Янтарь", "Amber"),
    ("Кольчуга", "Chainmail"),
    ("Мэри", "Mary"),
    ("С Любовью", "With Love"),
    ("Атом", "Atom"),
    ("Ирбис", "Irbis"),
    ("Вихрь", "Vortex"),
    ("Луноход", "Moonwalker"),
    ("Пустыня", "Desert"),
    ("Синий", "Blue"),
    ("Тундра", "Tundra"),
    ("Ягуар", "Jaguar"),
    ("Фотон", "Photon"),
    // Resistance modules
    ("Дельфин", "Dolphin"),
    ("Оцелот", "Ocelot"),
    ("Барсук", "Badger"),
    ("Волк", "Wolf"),
    ("Пантера", "Panther"),
];

/// Replace every known localized substring with its canonical English
/// equivalent. Unknown text passes through unchanged.
pub fn translate(text: &str) -> String {
    let mut out = s!(text);
    for &(localized, canonical) in TERMS {
        if out.contains(localized) {
            out = out.replace(localized, canonical);
        }
    }
    out
}

/// Canonical rank for a fully-translated display string. `Recruit` on no
/// match. The site displays "Sergeant First Class" for a tier the XP table
/// does not carry; it folds into the adjacent lower tier.
pub fn rank_key_for(display: &str) -> Rank {
    match display.trim() {
        "Recruit" => Rank::Recruit,
        "Private" => Rank::Private,
        "Gefreiter" => Rank::Gefreiter,
        "Corporal" => Rank::Corporal,
        "Master Corporal" => Rank::MasterCorporal,
        "Sergeant" => Rank::Sergeant,
        "Staff Sergeant" => Rank::StaffSergeant,
        "Sergeant First Class" => Rank::StaffSergeant,
        "Master Sergeant" => Rank::MasterSergeant,
        "First Sergeant" => Rank::FirstSergeant,
        "Sergeant Major" => Rank::SergeantMajor,
        "Warrant Officer 1" => Rank::WarrantOfficer1,
        "Chief Warrant Officer 2" => Rank::ChiefWarrantOfficer2,
        "Chief Warrant Officer 3" => Rank::ChiefWarrantOfficer3,
        "Chief Warrant Officer 4" => Rank::ChiefWarrantOfficer4,
        "Chief Warrant Officer 5" => Rank::ChiefWarrantOfficer5,
        "Third Lieutenant" => Rank::ThirdLieutenant,
        "Second Lieutenant" => Rank::SecondLieutenant,
        "First Lieutenant" => Rank::FirstLieutenant,
        "Captain" => Rank::Captain,
        "Major" => Rank::Major,
        "Lieutenant Colonel" => Rank::LieutenantColonel,
        "Colonel" => Rank::Colonel,
        "Brigadier" => Rank::Brigadier,
        "Major General" => Rank::MajorGeneral,
        "Lieutenant General" => Rank::LieutenantGeneral,
        "General" => Rank::General,
        "Marshal" => Rank::Marshal,
        "Field Marshal" => Rank::FieldMarshal,
        "Commander" => Rank::Commander,
        "Generalissimo" => Rank::Generalissimo,
        "Legend" | "Legend Premium" => Rank::LegendPremium,
        "Legend 2" | "Legend 3" | "Legend 4" | "Legend 5" => Rank::LegendPremium,
        _ => Rank::Recruit,
    }
}

/// Rank badge images are imgur hashes; map the filename stem to a tier.
/// The site ships the same badge for two tier pairs (GzJRzgz, rO3Hs5f); the
/// higher tier wins, one mapping per key.
static RANK_IMAGES: &[(&str, Rank)] = &[
    ("M4GBQIq", Rank::Recruit),
    ("O6Tb9li", Rank::Private),
    ("sppjRis", Rank::Gefreiter),
    ("UWup9qJ", Rank::Corporal),
    ("lTXxLVJ", Rank::Sergeant),
    ("AYAs02w", Rank::StaffSergeant),
    ("Ljy2jDX", Rank::StaffSergeant),
    ("a3UCeT5", Rank::FirstSergeant),
    ("rCN2gJm", Rank::SergeantMajor),
    ("GzJRzgz", Rank::ThirdLieutenant),
    ("BIr8vRX", Rank::SecondLieutenant),
    ("dSE90bT", Rank::FirstLieutenant),
    ("BNZpCPo", Rank::Captain),
    ("pxzNyxi", Rank::Major),
    ("LATOpxZ", Rank::Colonel),
    ("R69LmLt", Rank::Brigadier),
    ("iTyjOt3", Rank::MajorGeneral),
    ("Q2YgFQ1", Rank::LieutenantGeneral),
    ("ekbJYyf", Rank::General),
    ("paF1myt", Rank::Marshal),
    ("wPZnaG0", Rank::FieldMarshal),
    ("Or6Ajto", Rank::Commander),
    ("OQEHkm7", Rank::Generalissimo),
    ("rO3Hs5f", Rank::LegendPremium),
];

/// Rank for a badge image reference like `https://i.imgur.com/rCN2gJm.png`.
/// Unknown or empty references fall back to the lowest tier.
pub fn rank_from_image(src: &str) -> Rank {
    let file = src.rsplit('/').next().unwrap_or(src);
    let stem = file.split('.').next().unwrap_or(file);
    RANK_IMAGES
        .iter()
        .find(|(hash, _)| *hash == stem)
        .map(|&(_, rank)| rank)
        .unwrap_or(Rank::Recruit)
}

// Localized anchors used by the extractors.

/// Marker on an equipment card for the currently mounted item.
pub const MARK_EQUIPPED: &str = "Установленный";
pub const WORD_YES: &str = "Да";

pub const LABEL_KILLS: &str = "Уничтожил";
pub const LABEL_DEATHS: &str = "Подбит";
pub const LABEL_KD: &str = "У/П";
pub const LABEL_GOLDBOXES: &str = "золотых ящиков";
pub const LABEL_GROUP: &str = "Группа";
pub const LABEL_PREMIUM: &str = "Премиум";

/// Paint names the profile page shows as free-standing text rather than
/// equipment cards.
pub static PAINT_NAMES: &[&str] = &["Фотон", "Граффити", "Ирбис", "Атом"];

/// Canonical key for a per-category position label on the profile page.
pub fn category_key(label: &str) -> String {
    match label.trim() {
        "По опыту" => s!("experience"),
        "По кристаллам" => s!("crystals"),
        "По киллам" => s!("kills"),
        "Голдоловов" => s!("goldboxes"),
        "По эффективности" => s!("efficiency"),
        other => translate(other).to_lowercase(),
    }
}
