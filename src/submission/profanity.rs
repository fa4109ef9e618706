use regex::Regex;
use std::sync::LazyLock;

const BAD_WORDS: &[&str] = &[
    "ancuk", "ancok", "ajig", "anjay", "anjing", "anying", "anjir", "asu", "asyu",
    "babangus", "babi", "bacol", "bacot", "bagong", "bajingan", "balegug", "banci",
    "bangke", "bangsat", "bedebah", "bedegong", "bego", "belegug", "beloon", "bencong",
    "bloon", "blo'on", "bodoh", "boloho", "buduk", "budug", "celeng", "cibai", "cibay",
    "cocot", "cocote", "cok", "cokil", "colai", "colay", "coli", "colmek", "conge",
    "congean", "congek", "congor", "cuk", "cukima", "cukimai", "cukimay", "dancok",
    "entot", "entotan", "ewe", "ewean", "gelo", "genjik", "germo", "gigolo", "goblo",
    "goblog", "goblok", "hencet", "henceut", "heunceut", "homo", "idiot", "itil",
    "jancuk", "jancok", "jablay", "jalang", "jembut", "jiancok", "jilmek", "jurig",
    "kacung", "kampang", "kampret", "kampungan", "kehed", "kenthu", "kentot", "kentu",
    "keparat", "kimak", "kintil", "kirik", "kunyuk", "kurap", "konti", "kontol",
    "kopet", "koplok", "lacur", "lebok", "lonte", "maho", "meki", "memek", "monyet",
    "ndas", "ndasmu", "ngehe", "ngentot", "nggateli", "nyepong", "ngewe", "ngocok",
    "pante", "pantek", "patek", "pathek", "peju", "pejuh", "pecun", "pecundang",
    "pelacur", "pelakor", "peler", "pepek", "puki", "pukima", "pukimae", "pukimak",
    "pukimay", "sampah", "sepong", "sial", "sialan", "silit", "sinting", "sontoloyo",
    "tai", "taik", "tempek", "tempik", "tete", "tetek", "tiembokne", "titit", "toket",
    "tolol", "ublag", "udik", "wingkeng",
];

// Longest words first so "cokil" is masked whole rather than as "cok" + "il".
static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let mut words: Vec<&str> = BAD_WORDS.to_vec();
    words.sort_by(|a, b| b.len().cmp(&a.len()));
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})")).unwrap()
});

/// True when any listed word starts at a word boundary in `text`.
pub fn contains(text: &str) -> bool {
    PATTERN.is_match(text)
}

/// Replace every match with one `*` per character.
pub fn mask(text: &str) -> String {
    PATTERN
        .replace_all(text, |caps: &regex::Captures| "*".repeat(caps[0].chars().count()))
        .into_owned()
}
