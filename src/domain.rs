use chrono::Utc;
use uuid::Uuid;

/// A display accent color in ARGB order, chosen once at note creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xFFFF_FFFF);
}

/// The fixed accent palette notes are colored from.
///
/// Red-orange, pink, baby blue, violet, light green.
pub const PALETTE: [Color; 5] = [
    Color(0xFFFF_AB91),
    Color(0xFFF4_8FB1),
    Color(0xFF81_DEEA),
    Color(0xFFCF_94DA),
    Color(0xFFE7_ED9B),
];

/// Picks an accent color from `palette` for the given seed.
///
/// Pure and total: the same seed always yields the same color, and an
/// empty palette falls back to [`Color::WHITE`]. Production code seeds
/// this from the note id; tests pass fixed seeds.
pub fn pick_color(palette: &[Color], seed: u64) -> Color {
    if palette.is_empty() {
        return Color::WHITE;
    }
    palette[(seed % palette.len() as u64) as usize]
}

/// A user-authored note: a title/content pair with metadata.
///
/// `id` is the stable key for lookups and list diffing; `timestamp_ms`
/// is unix epoch milliseconds at creation and drives sort order within
/// each pin group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub timestamp_ms: i64,
    pub color: Color,
    pub is_pinned: bool,
}

impl Note {
    /// Constructs a fresh unpinned note with a new id, the current time,
    /// and a palette color seeded from the id bytes.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Note {
        let id = Uuid::new_v4();
        let color = pick_color(&PALETTE, color_seed(&id));

        Note {
            id,
            title: title.into(),
            content: content.into(),
            timestamp_ms: Utc::now().timestamp_millis(),
            color,
            is_pinned: false,
        }
    }

    /// Case-insensitive substring match against title OR content.
    ///
    /// The empty query matches every note.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query) || self.content.to_lowercase().contains(&query)
    }
}

/// Sorts notes pinned-first, then newest-first within each group.
///
/// Stable, so equal-timestamp notes keep their relative order.
pub fn sort_notes(notes: &mut [Note]) {
    notes.sort_by(|a, b| {
        b.is_pinned
            .cmp(&a.is_pinned)
            .then(b.timestamp_ms.cmp(&a.timestamp_ms))
    });
}

fn color_seed(id: &Uuid) -> u64 {
    id.as_bytes()
        .iter()
        .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(*b as u64))
}
