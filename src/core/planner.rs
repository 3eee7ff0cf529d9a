use crate::domain::model::ValentineDay;
use crate::domain::ports::KeyValueStore;
use crate::utils::error::{LoveError, Result};
use std::collections::HashMap;

pub const COMPLETED_KEY: &str = "valentineCompleted";
pub const NOTES_KEY: &str = "valentineNotes";

pub static VALENTINE_WEEK: [ValentineDay; 8] = [
    ValentineDay {
        name: "Rose Day",
        date: "Feb 7",
        suggestion: "Send a virtual rose or buy fresh roses. Red for love, yellow for friendship!",
        color: "from-red-500 to-rose-500",
        template: "🌹 A rose for you, my love...",
    },
    ValentineDay {
        name: "Propose Day",
        date: "Feb 8",
        suggestion: "Express your feelings! Write a heartfelt proposal or love letter.",
        color: "from-pink-500 to-rose-500",
        template: "💍 Will you be mine forever?",
    },
    ValentineDay {
        name: "Chocolate Day",
        date: "Feb 9",
        suggestion: "Share sweet treats! Order their favorite chocolates or make homemade ones.",
        color: "from-amber-700 to-amber-900",
        template: "🍫 Something sweet for someone sweet!",
    },
    ValentineDay {
        name: "Teddy Day",
        date: "Feb 10",
        suggestion: "Gift a cuddly teddy bear as a symbol of your affection and care.",
        color: "from-orange-400 to-red-400",
        template: "🧸 A cuddly friend to remind you of me!",
    },
    ValentineDay {
        name: "Promise Day",
        date: "Feb 11",
        suggestion: "Make meaningful promises. Commit to your relationship goals together.",
        color: "from-blue-500 to-indigo-500",
        template: "🤝 I promise to always love and cherish you...",
    },
    ValentineDay {
        name: "Hug Day",
        date: "Feb 12",
        suggestion: "Give warm hugs! Send virtual hugs or plan to meet for a real embrace.",
        color: "from-green-500 to-emerald-500",
        template: "🤗 Sending you the warmest hug!",
    },
    ValentineDay {
        name: "Kiss Day",
        date: "Feb 13",
        suggestion: "Share sweet messages or plan a romantic moment together.",
        color: "from-rose-500 to-pink-600",
        template: "💋 Sealed with a kiss...",
    },
    ValentineDay {
        name: "Valentine's Day",
        date: "Feb 14",
        suggestion: "The grand finale! Plan something special - dinner, gifts, or a surprise date!",
        color: "from-red-600 to-pink-600",
        template: "❤️ Happy Valentine's Day, my love!",
    },
];

/// Looks a day up by full name or by its first word ("rose", "valentine's").
pub fn find_day(query: &str) -> Result<&'static ValentineDay> {
    let wanted = query.trim().to_lowercase();
    VALENTINE_WEEK
        .iter()
        .find(|day| {
            let name = day.name.to_lowercase();
            name == wanted || name.split_whitespace().next() == Some(wanted.as_str())
        })
        .ok_or_else(|| {
            LoveError::invalid_input(
                "day",
                format!(
                    "Unknown day '{}'. Valid days: {}",
                    query,
                    VALENTINE_WEEK
                        .iter()
                        .map(|d| d.name)
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            )
        })
}

/// Valentine week progress and notes, persisted through an injected store.
pub struct Planner<S: KeyValueStore> {
    store: S,
    completed: Vec<String>,
    notes: HashMap<String, String>,
}

impl<S: KeyValueStore> Planner<S> {
    pub async fn load(store: S) -> Result<Self> {
        let completed: Vec<String> = match store.load(COMPLETED_KEY).await? {
            Some(value) => serde_json::from_value(value)?,
            None => Vec::new(),
        };
        let notes: HashMap<String, String> = match store.load(NOTES_KEY).await? {
            Some(value) => serde_json::from_value(value)?,
            None => HashMap::new(),
        };

        tracing::debug!(
            "Loaded planner state: {} completed, {} notes",
            completed.len(),
            notes.len()
        );

        Ok(Self {
            store,
            completed,
            notes,
        })
    }

    pub fn days(&self) -> &'static [ValentineDay] {
        &VALENTINE_WEEK
    }

    pub fn is_completed(&self, day: &str) -> bool {
        self.completed.iter().any(|d| d == day)
    }

    pub fn note(&self, day: &str) -> Option<&str> {
        self.notes.get(day).map(String::as_str)
    }

    /// (completed, total)
    pub fn progress(&self) -> (usize, usize) {
        let done = VALENTINE_WEEK
            .iter()
            .filter(|d| self.is_completed(d.name))
            .count();
        (done, VALENTINE_WEEK.len())
    }

    /// Flips the completion mark and returns the new state.
    pub async fn toggle_complete(&mut self, day: &str) -> Result<bool> {
        let day = find_day(day)?;

        let now_completed = if self.is_completed(day.name) {
            self.completed.retain(|d| d != day.name);
            false
        } else {
            self.completed.push(day.name.to_string());
            true
        };

        self.store
            .save(COMPLETED_KEY, &serde_json::to_value(&self.completed)?)
            .await?;

        tracing::info!(day = day.name, completed = now_completed, "Toggled planner day");
        Ok(now_completed)
    }

    pub async fn save_note(&mut self, day: &str, note: &str) -> Result<()> {
        let day = find_day(day)?;
        self.notes.insert(day.name.to_string(), note.to_string());
        self.store
            .save(NOTES_KEY, &serde_json::to_value(&self.notes)?)
            .await?;

        tracing::info!(day = day.name, "Saved planner note");
        Ok(())
    }

    /// Saves the day's canned template as its note.
    pub async fn use_template(&mut self, day: &str) -> Result<String> {
        let template = find_day(day)?.template;
        self.save_note(day, template).await?;
        Ok(template.to_string())
    }
}
