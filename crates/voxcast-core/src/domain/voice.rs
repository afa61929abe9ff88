//! Voice catalog: the static set of voices offered to the user.
//!
//! The catalog is grouped by language. Group order and entry order inside a
//! group are preserved exactly as configured because the UI renders them as a
//! grouped selector in that order.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Voice used when the caller does not pick one.
pub const DEFAULT_VOICE_ID: &str = "es-ES-ElviraNeural";

/// Demo text prefilled in the UI text box.
pub const DEMO_TEXT: &str = "Hola, esto es una prueba de síntesis de voz.";

/// A single selectable voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceEntry {
    /// Engine voice identifier (e.g. `"es-ES-ElviraNeural"`).
    pub id: String,
    /// Human-readable label shown in the selector.
    pub display_label: String,
    /// Name of the group this voice belongs to.
    pub group_name: String,
}

/// An ordered group of voices sharing a language label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceGroup {
    pub name: String,
    pub voices: Vec<VoiceEntry>,
}

/// One row of the flattened grouped selector.
///
/// Group headers are emitted as disabled pseudo-entries so a flat selector
/// widget can render the grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectorOption {
    pub label: String,
    pub value: String,
    pub disabled: bool,
}

/// Errors raised while building a catalog from configuration.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Voice catalog is empty")]
    Empty,

    #[error("Voice group '{0}' has no voices")]
    EmptyGroup(String),

    #[error("Voice group name cannot be empty")]
    UnnamedGroup,

    #[error("Duplicate voice id '{0}'")]
    DuplicateVoice(String),

    #[error("Voice id cannot be empty (group '{0}')")]
    EmptyVoiceId(String),

    #[error("Failed to read voice catalog {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Invalid voice catalog JSON: {0}")]
    Parse(String),
}

/// File shape of a catalog group.
#[derive(Debug, Deserialize)]
struct GroupRecord {
    name: String,
    voices: Vec<VoiceRecord>,
}

#[derive(Debug, Deserialize)]
struct VoiceRecord {
    id: String,
    label: String,
}

/// Immutable, ordered voice catalog.
#[derive(Debug, Clone)]
pub struct VoiceCatalog {
    groups: Vec<VoiceGroup>,
    ids: HashSet<String>,
    default_voice: String,
}

impl VoiceCatalog {
    /// Build a catalog from `(group, [(id, label)])` pairs, keeping their order.
    ///
    /// The default voice is [`DEFAULT_VOICE_ID`] when present, otherwise the
    /// first voice of the first group.
    pub fn from_groups<G, V>(groups: G) -> Result<Self, CatalogError>
    where
        G: IntoIterator<Item = (String, V)>,
        V: IntoIterator<Item = (String, String)>,
    {
        let mut ids = HashSet::new();
        let mut built = Vec::new();

        for (name, voices) in groups {
            if name.trim().is_empty() {
                return Err(CatalogError::UnnamedGroup);
            }
            let mut entries = Vec::new();
            for (id, label) in voices {
                if id.trim().is_empty() {
                    return Err(CatalogError::EmptyVoiceId(name));
                }
                if !ids.insert(id.clone()) {
                    return Err(CatalogError::DuplicateVoice(id));
                }
                entries.push(VoiceEntry {
                    id,
                    display_label: label,
                    group_name: name.clone(),
                });
            }
            if entries.is_empty() {
                return Err(CatalogError::EmptyGroup(name));
            }
            built.push(VoiceGroup {
                name,
                voices: entries,
            });
        }

        let default_voice = if ids.contains(DEFAULT_VOICE_ID) {
            DEFAULT_VOICE_ID.to_string()
        } else {
            built
                .first()
                .and_then(|g| g.voices.first())
                .map(|v| v.id.clone())
                .ok_or(CatalogError::Empty)?
        };

        Ok(Self {
            groups: built,
            ids,
            default_voice,
        })
    }

    /// Parse a catalog from JSON text: `[{"name": .., "voices": [{"id": .., "label": ..}]}]`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<GroupRecord> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_groups(records.into_iter().map(|g| {
            let voices: Vec<(String, String)> =
                g.voices.into_iter().map(|v| (v.id, v.label)).collect();
            (g.name, voices)
        }))
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|e| CatalogError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    /// The catalog shipped with the tool.
    pub fn builtin() -> Self {
        let groups = BUILTIN_GROUPS.iter().map(|(name, voices)| {
            (
                (*name).to_string(),
                voices
                    .iter()
                    .map(|(id, label)| ((*id).to_string(), (*label).to_string()))
                    .collect::<Vec<_>>(),
            )
        });
        // The built-in table is unique and non-empty.
        Self::from_groups(groups).unwrap_or_else(|_| Self {
            groups: Vec::new(),
            ids: HashSet::new(),
            default_voice: DEFAULT_VOICE_ID.to_string(),
        })
    }

    /// Groups in configured order.
    pub fn groups(&self) -> &[VoiceGroup] {
        &self.groups
    }

    /// Whether `voice_id` is offered by this catalog.
    pub fn exists(&self, voice_id: &str) -> bool {
        self.ids.contains(voice_id)
    }

    /// Look up a voice entry by id.
    pub fn get(&self, voice_id: &str) -> Option<&VoiceEntry> {
        self.groups
            .iter()
            .flat_map(|g| g.voices.iter())
            .find(|v| v.id == voice_id)
    }

    pub fn default_voice(&self) -> &str {
        &self.default_voice
    }

    /// Total number of voices.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Flatten into selector rows with a disabled header per group.
    pub fn selector_options(&self) -> Vec<SelectorOption> {
        let mut options = Vec::with_capacity(self.groups.len() + self.len());
        for group in &self.groups {
            options.push(SelectorOption {
                label: format!("── {} ──", group.name),
                value: format!("hdr_{}", group.name),
                disabled: true,
            });
            options.extend(group.voices.iter().map(|v| SelectorOption {
                label: v.display_label.clone(),
                value: v.id.clone(),
                disabled: false,
            }));
        }
        options
    }
}

impl Default for VoiceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

type BuiltinGroup = (&'static str, &'static [(&'static str, &'static str)]);

const BUILTIN_GROUPS: &[BuiltinGroup] = &[
    (
        "Español",
        &[
            ("es-ES-ElviraNeural", "Elvira (es-ES fem.)"),
            ("es-ES-AlbaNeural", "Alba (es-ES fem.)"),
            ("es-ES-AlvaroNeural", "Álvaro (es-ES masc.)"),
        ],
    ),
    (
        "Inglés (US)",
        &[
            ("en-US-JennyNeural", "Jenny (en-US fem.)"),
            ("en-US-BrandonNeural", "Brandon (en-US masc.)"),
        ],
    ),
    (
        "Inglés (UK)",
        &[
            ("en-GB-LibbyNeural", "Libby (en-GB fem.)"),
            ("en-GB-RyanNeural", "Ryan (en-GB masc.)"),
        ],
    ),
    (
        "Alemán",
        &[
            ("de-DE-KatjaNeural", "Katja (de-DE fem.)"),
            ("de-DE-ConradNeural", "Conrad (de-DE masc.)"),
        ],
    ),
    (
        "Portugués",
        &[
            ("pt-PT-RaquelNeural", "Raquel (pt-PT fem.)"),
            ("pt-BR-AntonioNeural", "Antônio (pt-BR masc.)"),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_preserves_group_and_entry_order() {
        let catalog = VoiceCatalog::builtin();
        let names: Vec<_> = catalog.groups().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(
            names,
            ["Español", "Inglés (US)", "Inglés (UK)", "Alemán", "Portugués"]
        );

        let spanish: Vec<_> = catalog.groups()[0]
            .voices
            .iter()
            .map(|v| v.id.as_str())
            .collect();
        assert_eq!(
            spanish,
            ["es-ES-ElviraNeural", "es-ES-AlbaNeural", "es-ES-AlvaroNeural"]
        );
        assert_eq!(catalog.len(), 11);
        assert_eq!(catalog.default_voice(), DEFAULT_VOICE_ID);
    }

    #[test]
    fn exists_and_get() {
        let catalog = VoiceCatalog::builtin();
        assert!(catalog.exists("en-GB-RyanNeural"));
        assert!(!catalog.exists("xx-XX-NobodyNeural"));
        assert!(!catalog.exists(""));

        let entry = catalog.get("pt-BR-AntonioNeural").unwrap();
        assert_eq!(entry.group_name, "Portugués");
        assert_eq!(entry.display_label, "Antônio (pt-BR masc.)");
    }

    #[test]
    fn selector_options_emit_disabled_headers() {
        let catalog = VoiceCatalog::builtin();
        let options = catalog.selector_options();
        assert_eq!(options.len(), 5 + 11);

        assert_eq!(options[0].label, "── Español ──");
        assert_eq!(options[0].value, "hdr_Español");
        assert!(options[0].disabled);
        assert_eq!(options[1].value, "es-ES-ElviraNeural");
        assert!(!options[1].disabled);

        // Header for the second group comes right after the three Spanish voices.
        assert_eq!(options[4].value, "hdr_Inglés (US)");
    }

    #[test]
    fn from_json_keeps_order_and_picks_first_voice_as_default() {
        let catalog = VoiceCatalog::from_json(
            r#"[
                {"name": "B", "voices": [{"id": "b-2", "label": "B two"}, {"id": "b-1", "label": "B one"}]},
                {"name": "A", "voices": [{"id": "a-1", "label": "A one"}]}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.groups()[0].name, "B");
        assert_eq!(catalog.groups()[0].voices[0].id, "b-2");
        assert_eq!(catalog.default_voice(), "b-2");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = VoiceCatalog::from_json(
            r#"[
                {"name": "A", "voices": [{"id": "v", "label": "x"}]},
                {"name": "B", "voices": [{"id": "v", "label": "y"}]}
            ]"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateVoice(id) if id == "v"));
    }

    #[test]
    fn rejects_empty_catalog_and_groups() {
        assert!(matches!(
            VoiceCatalog::from_json("[]"),
            Err(CatalogError::Empty)
        ));
        assert!(matches!(
            VoiceCatalog::from_json(r#"[{"name": "A", "voices": []}]"#),
            Err(CatalogError::EmptyGroup(_))
        ));
        assert!(matches!(
            VoiceCatalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("voices.json");
        std::fs::write(
            &path,
            r#"[{"name": "Solo", "voices": [{"id": "x-1", "label": "X"}]}]"#,
        )
        .unwrap();

        let catalog = VoiceCatalog::load(&path).unwrap();
        assert!(catalog.exists("x-1"));

        let missing = VoiceCatalog::load(&dir.path().join("missing.json"));
        assert!(matches!(missing, Err(CatalogError::Read { .. })));
    }
}
