//! Reading Catalog
//!
//! Resolves the daily passage for a plan/version pair and formats the
//! message body. Content is static and never mutated at runtime.

use crate::domain::services::content;
use crate::domain::value_objects::{BibleVersion, Passage, ReadingPlan};

const COMPLETION_BODY: &str =
    "Parabéns! Você completou o plano de leitura anual. Reinicie ou escolha um novo plano.";

/// Wraps any day number into the 1..=365 plan range.
///
/// Day 366 (leap years) lands on day 1; 0 and negatives wrap backwards.
pub fn wrap_day_of_year(day: i64) -> u32 {
    ((day - 1).rem_euclid(365) + 1) as u32
}

/// A resolved daily reading before it is persisted
#[derive(Debug, Clone)]
pub struct DailyReading {
    /// Wrapped day of year (1..=365)
    pub day: u32,
    pub passage: Passage,
    pub body: String,
    /// True when the wrapped day has no plan entry left
    pub plan_completed: bool,
}

impl DailyReading {
    pub fn reference(&self) -> String {
        self.passage.to_string()
    }
}

/// Version metadata for the catalog listing
#[derive(Debug, Clone)]
pub struct VersionInfo {
    pub code: BibleVersion,
    pub name: &'static str,
}

/// Plan metadata for the catalog listing
#[derive(Debug, Clone)]
pub struct PlanInfo {
    pub code: ReadingPlan,
    pub name: &'static str,
    pub description: &'static str,
}

/// Annual reading plans plus per-translation verse texts
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadingCatalog;

impl ReadingCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the reading for a (possibly unwrapped) day of year.
    ///
    /// A day with no plan entry means the user finished the plan: the
    /// final mapped passage is referenced and the body congratulates
    /// instead of instructing. That outcome is a normal reading, not an
    /// error.
    pub fn reading_for_day(
        &self,
        plan: ReadingPlan,
        version: BibleVersion,
        day: i64,
    ) -> DailyReading {
        let day = wrap_day_of_year(day);

        match content::plan_table(plan).iter().find(|e| e.day == day) {
            Some(entry) => {
                let passage = entry.passage();
                let body = self.body_for(version, &passage);
                DailyReading {
                    day,
                    passage,
                    body,
                    plan_completed: false,
                }
            }
            None => DailyReading {
                day,
                passage: content::final_entry(plan).passage(),
                body: COMPLETION_BODY.to_string(),
                plan_completed: true,
            },
        }
    }

    /// Message body for a passage: the quoted verse text when this
    /// translation carries it, otherwise a reading instruction.
    pub fn body_for(&self, version: BibleVersion, passage: &Passage) -> String {
        let reference = passage.to_string();
        let version_name = version.display_name();

        let verse = content::verse_table(version)
            .iter()
            .find(|(key, _)| *key == reference)
            .map(|(_, text)| *text);

        match verse {
            Some(text) => format!("\"{}\"\n\n📖 {} - {}", text, reference, version_name),
            None => format!(
                "📖 Leitura de hoje: {}\n\nVersão: {}\n\nLeia esta passagem em sua Bíblia e reflita sobre a mensagem de Deus para sua vida hoje.",
                reference, version_name
            ),
        }
    }

    pub fn versions(&self) -> Vec<VersionInfo> {
        BibleVersion::all()
            .into_iter()
            .map(|code| VersionInfo {
                code,
                name: code.display_name(),
            })
            .collect()
    }

    pub fn plans(&self) -> Vec<PlanInfo> {
        ReadingPlan::all()
            .into_iter()
            .map(|code| PlanInfo {
                code,
                name: code.display_name(),
                description: code.description(),
            })
            .collect()
    }
}
