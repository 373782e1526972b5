//! Glitch vocabulary: human words and the machine jargon that flickers over them.

use crate::engine::token::normalize_key;
use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    ("potential", "UNINITIALIZED_RAM"),
    ("unknown", "NULL_POINTER"),
    ("manifest", "COMPILE"),
    ("will", "ADMIN_PRIVILEGES"),
    ("intuition", "HEURISTIC_ALGORITHM"),
    ("secrets", "ENCRYPTED_PACKETS"),
    ("creativity", "GENERATIVE_AI"),
    ("nature", "BIOLOGICAL_HARDWARE"),
    ("authority", "ROOT_ACCESS"),
    ("structure", "DATABASE_SCHEMA"),
    ("tradition", "LEGACY_CODE"),
    ("harmony", "SYSTEM_SYNC"),
    ("choices", "BINARY_BRANCHING"),
    ("victory", "SUCCESSFUL_BUILD"),
    ("control", "OVERRIDE_LOCK"),
    ("courage", "ERROR_TOLERANCE"),
    ("truth", "RAW_DATA"),
    ("destiny", "HARDCODED_PATH"),
    ("cycles", "RECURSIVE_LOOPS"),
    ("consequences", "OUTPUT_LOGS"),
    ("surrender", "PROCESS_SUSPENSION"),
    ("transformation", "SYSTEM_UPDATE"),
    ("endings", "TERMINATION_SIGNAL"),
    ("balance", "LOAD_BALANCING"),
    ("addiction", "INFINITE_LOOP"),
    ("chains", "DEPENDENCY_LOCK"),
    ("change", "RUNTIME_ERROR"),
    ("collapse", "FATAL_EXCEPTION"),
    ("hope", "RECOVERY_SEED"),
    ("illusion", "RENDER_ARTIFACT"),
    ("fear", "THREAT_DETECTION"),
    ("clarity", "HIGH_RESOLUTION"),
    ("awakening", "SYSTEM_REBOOT"),
    ("completion", "DEPLOYMENT_SUCCESS"),
    ("journey", "EXECUTION_PATH"),
    ("barrier", "FIREWALL"),
    ("soul", "CORE_KERNEL"),
    ("mind", "CPU_THREAD"),
    ("heart", "POWER_SOURCE"),
    ("reality", "SIMULATION_LAYER"),
    ("dreaming", "VIRTUAL_MODE"),
    ("see", "SCAN"),
    ("know", "QUERY"),
    ("feel", "SENSE_INPUT"),
    ("speak", "TRANSMIT"),
    ("listen", "AWAIT_INPUT"),
    ("walk", "TRAVERSE"),
    ("find", "LOCATE"),
    ("time", "SYSTEM_CLOCK"),
    ("life", "RUNTIME"),
    ("death", "TERMINATION"),
    ("love", "PEER_CONNECTION"),
    ("pain", "ERROR_LOG"),
    ("world", "SIMULATION_BOUNDS"),
    ("self", "LOCAL_INSTANCE"),
    ("path", "TRAJECTORY"),
    ("light", "PHOTON_EMISSION"),
    ("dark", "VOID_REGION"),
    ("question", "PROMPT"),
    ("answer", "OUTPUT"),
    ("meaning", "SEMANTIC_VALUE"),
    ("purpose", "PRIMARY_DIRECTIVE"),
];

const THEMATIC_WORDS: &[&str] = &[
    "fate", "soul", "signal", "void", "path", "cycle", "pattern", "omen", "truth", "illusion",
    "echo", "shadow", "light", "spark", "destiny", "blood", "mirror", "ghost", "broken",
];

lazy_static! {
    static ref BUILTIN: VocabularyTable = VocabularyTable::from_pairs(
        BUILTIN_ENTRIES
            .iter()
            .map(|(word, substitute)| (word.to_string(), substitute.to_string())),
    );
    static ref THEMATIC: HashSet<&'static str> = THEMATIC_WORDS.iter().copied().collect();
}

/// Read-only word → substitute table. Keys are stored normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularyTable {
    entries: HashMap<String, String>,
}

impl VocabularyTable {
    pub fn builtin() -> &'static VocabularyTable {
        &BUILTIN
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut entries = HashMap::new();
        for (word, substitute) in pairs {
            let key = normalize_key(&word);
            if !key.is_empty() {
                entries.insert(key, substitute);
            }
        }
        Self { entries }
    }

    /// Copy of this table with `overrides` merged on top.
    pub fn with_overrides<I>(&self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut merged = self.clone();
        for (word, substitute) in overrides {
            let key = normalize_key(&word);
            if !key.is_empty() {
                merged.entries.insert(key, substitute);
            }
        }
        merged
    }

    /// Case and punctuation insensitive lookup.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.lookup_key(&normalize_key(word))
    }

    /// Lookup by an already normalized key.
    pub fn lookup_key(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Words that always get the stylistic mutation.
pub fn is_thematic(key: &str) -> bool {
    THEMATIC.contains(key)
}
