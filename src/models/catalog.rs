/// Titles eligible for logging: the Dovzhenko Centre Top-100 selection.
///
/// Fixed at build time; the order is the order offered to the title picker.
pub const CATALOG: &[&str] = &[
    "Земля (1930)",
    "Тіні забутих предків (1964)",
    "Людина з кіноапаратом (1929)",
    "Ентузіязм (1931)",
    "Криниця для спраглих (1965)",
    "Вавилон ХХ (1979)",
    "Білий птах з чорною ознакою (1971)",
    "Пропала грамота (1972)",
    "Камінний хрест (1968)",
    "Поводир (2014)",
    "Плем'я (2014)",
    "Мої думки тихі (2019)",
    "Захар Беркут (1971)",
    "Атлантида (2019)",
    "Кіборги (2017)",
];

/// Checks whether a title belongs to `catalog` (exact match)
pub fn contains(catalog: &[&str], title: &str) -> bool {
    catalog.iter().any(|known| *known == title)
}
