use super::event::EventRecord;

/// A distinct `ActivityService` value and the colour it is drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    /// Colour of the first record carrying this category, if that record had one.
    pub color: Option<String>,
    /// Records of this category disagree on colour.
    pub conflicting: bool,
}

/// Distinct categories in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Categories {
    entries: Vec<Category>,
}

impl Categories {
    pub fn from_records(records: &[EventRecord]) -> Self {
        let mut entries: Vec<Category> = Vec::new();
        let mut seen_colors: Vec<Option<&str>> = Vec::new();

        for ev in records {
            let name = ev.category();
            let color = ev.color.as_deref();
            match entries.iter().position(|c| c.name == name) {
                Some(i) => {
                    if let (Some(first), Some(this)) = (seen_colors[i], color) {
                        if !first.eq_ignore_ascii_case(this) {
                            entries[i].conflicting = true;
                        }
                    } else if seen_colors[i].is_none() {
                        seen_colors[i] = color;
                    }
                }
                None => {
                    entries.push(Category {
                        name: name.to_string(),
                        color: color.map(str::to_string),
                        conflicting: false,
                    });
                    seen_colors.push(color);
                }
            }
        }

        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|c| c.name == name)
    }

    pub fn get(&self, index: usize) -> Option<&Category> {
        self.entries.get(index)
    }

    pub fn conflicts(&self) -> impl Iterator<Item = &Category> {
        self.entries.iter().filter(|c| c.conflicting)
    }
}

/// Colour of the first record in `records` whose category is `category`.
///
/// Returns `None` both when no record matches and when the first match has
/// no colour of its own; later records are not consulted.
pub fn first_match_color<'a, I>(records: I, category: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    records
        .into_iter()
        .find(|ev| ev.category() == category)
        .and_then(|ev| ev.color.as_deref())
}
