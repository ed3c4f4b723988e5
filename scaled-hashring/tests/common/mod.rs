//! Shared fixtures for integration tests.

#![allow(dead_code)]

/// Five nodes named `node-a` through `node-e`.
pub fn five_nodes() -> Vec<String> {
    ["node-a", "node-b", "node-c", "node-d", "node-e"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Fixed corpus of 199 dictionary words used as distribution keys.
pub const WORDS: &[&str] = &[
    "illuminate", "reindicating", "monosymmetrical", "consultatory", "wroth", "tyrannosaur",
    "unsimmered", "resolvent", "jaycee", "sheathbill", "sievelike", "arena", "hemicyclic",
    "behead", "propensity", "arene", "sadducean", "venule", "hyposthenic", "leukorrheal",
    "nonpalpability", "juttingly", "preenjoyment", "flexuosely", "lumpen", "hold",
    "unilluminated", "hexamethylenetetramine", "ashen", "debtor", "vitamin", "dove",
    "verdigrisy", "uredial", "bipod", "cinematheque", "defaming", "bluestem", "porthole",
    "psalterium", "arianistic", "parathion", "realterable", "adorability", "gurgitation",
    "phenomenologically", "fowliang", "ghastily", "rutaceous", "broch", "nonemotional",
    "unfended", "cool", "counterturn", "jurat", "tabourer", "vaccinization", "circumfluous",
    "rackett", "basswood", "communism", "archdeaconate", "pyrochemical", "familism",
    "stravaiger", "orient", "asunci", "euphoriant", "phanerogamy", "proscribed",
    "hydroquinone", "preplotted", "drain", "unpioneering", "multitoned", "aegirine",
    "convenance", "wash", "crossbencher", "bethesda", "notion", "unsuccessive",
    "significativeness", "destituting", "bearishly", "simn", "repromised", "unridiculed",
    "watercress", "hagberry", "fangless", "slav", "thiopental", "indissolubility",
    "oculomotor", "calefaction", "barbless", "rewon", "manganophyllite", "albuminize", "vogie",
    "hospitable", "ducker", "snakelike", "attila", "cumulonimbus", "wordy", "apogamously",
    "constantinople", "invincibly", "preannounced", "holiday", "unchannelled",
    "inappreciativeness", "nonreflector", "unalacritous", "diptych", "vineries", "kenneled",
    "oversocialize", "cathomycin", "uncinctured", "donsy", "tathagata", "organza", "tipstaff",
    "retroaction", "noncontemporary", "metagenesis", "calorizer", "declive", "hall",
    "semirussian", "fiord", "cryophilic", "vestige", "hydrocarbonaceous", "tracklayer",
    "conicoid", "damp", "unhurtful", "experienced", "hither", "hortatorily", "serapeums",
    "institutes", "dvina", "undefrayed", "buckeen", "rheotropism", "superfeminine", "alden",
    "simile", "supernation", "dossil", "glossotomy", "inundation", "lonny", "mauby", "bat",
    "outblow", "dyestuff", "buttony", "naturopathy", "nantucket", "mandi", "oxyhydrogen",
    "whetstone", "sidereally", "logier", "belly", "uncouple", "subsidence", "puseyism",
    "lebbek", "fraternized", "stephen", "ucca", "discommodity", "pinny", "unmeritable",
    "prophetical", "ribbentrop", "nonassessability", "molt", "azotos", "plasmalogen",
    "overridden", "stylish", "undercurl", "reanimation", "tetrameter", "tincture", "tingle",
    "scorpioid", "nonelopement", "heterolysis", "day", "bibliographer",
];

/// Ratio between the most and least loaded counts. Infinite if any count is zero.
pub fn imbalance(counts: &[usize]) -> f64 {
    let max = counts.iter().copied().max().unwrap_or(0);
    let min = counts.iter().copied().min().unwrap_or(0);
    if min == 0 {
        return f64::INFINITY;
    }
    max as f64 / min as f64
}
