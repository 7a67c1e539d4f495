//! The throwaway structs the tutorial wraps fields in.

use chrono::NaiveDate;
use serde::Serialize;

use crate::field::{Policy, WrappedField};
use crate::policies::{AllCaps, Rating};

/// The version before wrappers: every setter has to remember to upper-case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlainName {
    first_name: String,
    last_name: String,
}

impl PlainName {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        PlainName {
            first_name: first_name.to_uppercase(),
            last_name: last_name.to_uppercase(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_first_name(&mut self, first_name: &str) {
        self.first_name = first_name.to_uppercase();
    }

    pub fn set_last_name(&mut self, last_name: &str) {
        self.last_name = last_name.to_uppercase();
    }
}

/// The same name with the upper-casing moved into the fields.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = ""))]
pub struct Name<P: Policy<String> = AllCaps> {
    pub first_name: WrappedField<String, P>,
    pub last_name: WrappedField<String, P>,
}

impl<P: Policy<String> + Clone> Name<P> {
    pub fn new(first_name: &str, last_name: &str, policy: P) -> Self {
        Name {
            first_name: WrappedField::new(first_name.to_owned(), policy.clone()),
            last_name: WrappedField::new(last_name.to_owned(), policy),
        }
    }

    pub fn full(&self) -> String {
        format!("{} {}", self.first_name.get(), self.last_name.get())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "T: Serialize"))]
pub struct Exam<T: Clone, P: Policy<T>> {
    pub student: String,
    pub score: WrappedField<T, P>,
}

impl<T: Clone, P: Policy<T>> Exam<T, P> {
    pub fn new(student: &str, score: T, policy: P) -> Self {
        Exam {
            student: student.to_owned(),
            score: WrappedField::new(score, policy),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = ""))]
pub struct Person<D: Policy<NaiveDate>> {
    pub name: String,
    pub birth_date: WrappedField<NaiveDate, D>,
}

impl<D: Policy<NaiveDate>> Person<D> {
    pub fn new(name: &str, birth_date: NaiveDate, policy: D) -> Self {
        Person {
            name: name.to_owned(),
            birth_date: WrappedField::new(birth_date, policy),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub name: String,
    pub ambiance: WrappedField<i32, Rating>,
    pub food: WrappedField<i32, Rating>,
}

impl Review {
    /// Ambiance in stars, food in plates.
    pub fn new(name: &str, ambiance: i32, food: i32) -> Self {
        Self::with_symbols(name, ambiance, food, Rating::default(), Rating::new("🍽"))
    }

    pub fn with_symbols(
        name: &str,
        ambiance: i32,
        food: i32,
        ambiance_symbol: Rating,
        food_symbol: Rating,
    ) -> Self {
        Review {
            name: name.to_owned(),
            ambiance: WrappedField::new(ambiance, ambiance_symbol),
            food: WrappedField::new(food, food_symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::{Clamped, Percent, Trimmed, UsDate};

    #[test]
    fn plain_name_upper_cases_through_every_path() {
        let mut me = PlainName::new("Stewart", "Lynch");
        assert_eq!((me.first_name(), me.last_name()), ("STEWART", "LYNCH"));

        me.set_first_name("stew");
        me.set_last_name("l.");
        assert_eq!((me.first_name(), me.last_name()), ("STEW", "L."));
    }

    #[test]
    fn wrapped_name_matches_the_plain_one() {
        let wrapped = Name::new("Stewart", "Lynch", AllCaps);
        let plain = PlainName::new("Stewart", "Lynch");
        assert_eq!(wrapped.first_name.get(), plain.first_name());
        assert_eq!(wrapped.full(), "STEWART LYNCH");
    }

    #[test]
    fn trimmed_name_reads_clean() {
        let me = Name::new("   Stewart  ", "  Lynch  ", Trimmed::default());
        assert_eq!(me.full(), "Stewart Lynch");
        assert_eq!(
            serde_json::to_value(&me).unwrap(),
            serde_json::json!({"first_name": "Stewart", "last_name": "Lynch"})
        );
    }

    #[test]
    fn exam_scores_are_clamped() {
        let physics = Exam::new("Stewart", -5, Percent);
        assert_eq!(physics.score.get(), 0);

        let mut chemistry = Exam::new("Stewart", 10, Clamped::new(10, 80).unwrap());
        assert_eq!(chemistry.score.get(), 10);
        chemistry.score.set(99);
        assert_eq!(
            serde_json::to_value(&chemistry).unwrap(),
            serde_json::json!({"student": "Stewart", "score": 80})
        );
    }

    #[test]
    fn person_projects_birth_date() {
        let born = NaiveDate::from_ymd_opt(2021, 1, 5).unwrap();
        let me = Person::new("Stewart", born, UsDate);
        assert_eq!(me.birth_date.project(), "01-05-2021");
        assert_eq!(me.birth_date.get(), born);
    }

    #[test]
    fn review_projects_each_rating_with_its_own_symbol() {
        let earls = Review::new("Earls", 5, 4);
        assert_eq!(earls.ambiance.project(), "⭐⭐⭐⭐⭐");
        assert_eq!(earls.food.project(), "🍽🍽🍽🍽");
        assert_eq!(
            serde_json::to_value(&earls).unwrap(),
            serde_json::json!({"name": "Earls", "ambiance": 5, "food": 4})
        );
    }
}
