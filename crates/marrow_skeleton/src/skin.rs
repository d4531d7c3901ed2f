use rustc_hash::FxHashMap;

/// A textured region placed relative to a slot's bone.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub name: String,
    pub x: f32,
    pub y: f32,
    /// Rotation in degrees.
    pub rotation: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Attachment {
    /// Width and height of an attachment that does not specify its size.
    pub const DEFAULT_SIZE: f32 = 32.0;

    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            width: Self::DEFAULT_SIZE,
            height: Self::DEFAULT_SIZE,
        }
    }
}

/// A named set of attachments, keyed by slot index and attachment name.
#[derive(Debug, Clone, Default)]
pub struct Skin {
    pub name: String,
    attachments: FxHashMap<usize, FxHashMap<String, Attachment>>,
}

impl Skin {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attachments: FxHashMap::default(),
        }
    }

    /// Registers an attachment for `slot` under `key`, replacing any previous one.
    pub fn add_attachment(&mut self, slot: usize, key: impl Into<String>, attachment: Attachment) {
        self.attachments
            .entry(slot)
            .or_default()
            .insert(key.into(), attachment);
    }

    #[must_use]
    pub fn attachment(&self, slot: usize, key: &str) -> Option<&Attachment> {
        self.attachments.get(&slot)?.get(key)
    }

    /// Iterates `(slot, key, attachment)` in no particular order.
    pub fn attachments(&self) -> impl Iterator<Item = (usize, &str, &Attachment)> {
        self.attachments.iter().flat_map(|(&slot, entries)| {
            entries
                .iter()
                .map(move |(key, attachment)| (slot, key.as_str(), attachment))
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attachments.values().map(FxHashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
