//! Compiles a list of search criteria into a single predicate over the
//! recipe aggregate.
//!
//! Each criterion becomes one fragment node; fragments that reach into an
//! owned collection carry a join key. Compilation collects the distinct join
//! keys up front, and evaluation establishes exactly one join handle per key,
//! so any number of fragments against the same collection share one traversal
//! and a recipe can never match more than once.

use std::collections::BTreeSet;

use serde_json::Value;
use thiserror::Error;

use crate::criteria::{SearchCriteria, SearchOperation};
use crate::domain::Recipe;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("unknown search field: {0}")]
    UnknownField(String),
}

/// An owned collection reachable from the aggregate root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JoinKey {
    Ingredients,
    Instructions,
}

impl JoinKey {
    fn resolve(key: &str) -> Option<JoinKey> {
        match key {
            "ingredientName" => Some(JoinKey::Ingredients),
            "description" => Some(JoinKey::Instructions),
            _ => None,
        }
    }
}

/// A scalar field on the aggregate root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootField {
    Id,
    Name,
    ServingNumber,
    IsVegetarian,
}

impl RootField {
    fn resolve(key: &str) -> Result<RootField, CriteriaError> {
        match key {
            "id" => Ok(RootField::Id),
            "name" => Ok(RootField::Name),
            "servingNumber" => Ok(RootField::ServingNumber),
            "isVegetarian" => Ok(RootField::IsVegetarian),
            other => Err(CriteriaError::UnknownField(other.to_string())),
        }
    }

    fn value_of(self, recipe: &Recipe) -> FieldValue<'_> {
        match self {
            RootField::Id => recipe.id.map_or(FieldValue::Missing, FieldValue::Int),
            RootField::Name => FieldValue::Text(&recipe.name),
            RootField::ServingNumber => FieldValue::Int(i64::from(recipe.serving_number)),
            RootField::IsVegetarian => FieldValue::Bool(recipe.is_vegetarian),
        }
    }
}

/// A root field's value at evaluation time. `Missing` (an unassigned id)
/// satisfies no fragment.
enum FieldValue<'a> {
    Int(i64),
    Text(&'a str),
    Bool(bool),
    Missing,
}

impl FieldValue<'_> {
    fn equals(&self, value: &Value) -> bool {
        match self {
            FieldValue::Int(n) => value.as_i64() == Some(*n),
            FieldValue::Text(s) => value.as_str().is_some_and(|v| v == *s),
            FieldValue::Bool(b) => value.as_bool() == Some(*b),
            FieldValue::Missing => false,
        }
    }

    /// Field >= value. Numeric fields compare numerically, textual fields
    /// lexically against the value's textual form.
    fn at_least(&self, value: &Value) -> bool {
        match self {
            FieldValue::Int(n) => value.as_i64().is_some_and(|v| *n >= v),
            FieldValue::Text(s) => *s >= text_of(value).as_str(),
            FieldValue::Bool(_) | FieldValue::Missing => false,
        }
    }

    fn to_text(&self) -> Option<String> {
        match self {
            FieldValue::Int(n) => Some(n.to_string()),
            FieldValue::Text(s) => Some((*s).to_string()),
            FieldValue::Bool(b) => Some(b.to_string()),
            FieldValue::Missing => None,
        }
    }
}

/// Textual form of a criterion value: strings verbatim, everything else in
/// its JSON rendering.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The criterion value treated as a collection. A non-array value is a
/// one-element collection.
fn collection_of(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.clone(),
        other => vec![other.clone()],
    }
}

/// One compiled criterion. Substring patterns are lower-cased at compile
/// time; every substring operator is case-insensitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Equals {
        field: RootField,
        value: Value,
    },
    MemberOf {
        field: RootField,
        values: Vec<Value>,
        negated: bool,
    },
    Like {
        field: RootField,
        pattern: String,
        negated: bool,
    },
    AtLeast {
        field: RootField,
        value: Value,
    },
    /// At least one row of the joined collection contains the pattern;
    /// negated, no row contains it.
    RelatedContains {
        join: JoinKey,
        pattern: String,
        negated: bool,
    },
}

impl Fragment {
    fn from_criterion(criterion: &SearchCriteria) -> Result<Fragment, CriteriaError> {
        let key = criterion.key();
        match criterion.operation() {
            SearchOperation::Equality => Ok(Fragment::Equals {
                field: RootField::resolve(key)?,
                value: criterion.value().clone(),
            }),
            SearchOperation::In => Ok(Fragment::MemberOf {
                field: RootField::resolve(key)?,
                values: collection_of(criterion.value()),
                negated: false,
            }),
            SearchOperation::NotIn => Ok(Fragment::MemberOf {
                field: RootField::resolve(key)?,
                values: collection_of(criterion.value()),
                negated: true,
            }),
            SearchOperation::Like => Ok(Fragment::Like {
                field: RootField::resolve(key)?,
                pattern: text_of(criterion.value()).to_lowercase(),
                negated: false,
            }),
            SearchOperation::GreaterThanOrEqual => Ok(Fragment::AtLeast {
                field: RootField::resolve(key)?,
                value: criterion.value().clone(),
            }),
            SearchOperation::Contains | SearchOperation::NotContains => {
                let negated = criterion.operation() == SearchOperation::NotContains;
                if let Some(join) = JoinKey::resolve(key) {
                    Ok(Fragment::RelatedContains {
                        join,
                        pattern: text_of(criterion.value()).to_lowercase(),
                        negated,
                    })
                } else {
                    // On a plain root field the match term is the criterion
                    // key itself, not its value. TODO: confirm the fallback
                    // term before anything besides the relation keys relies
                    // on this operator.
                    Ok(Fragment::Like {
                        field: RootField::resolve(key)?,
                        pattern: key.to_lowercase(),
                        negated,
                    })
                }
            }
        }
    }

    /// The owned collection this fragment reads, if any.
    pub fn join_key(&self) -> Option<JoinKey> {
        match self {
            Fragment::RelatedContains { join, .. } => Some(*join),
            _ => None,
        }
    }

    fn eval(&self, recipe: &Recipe, joins: &JoinHandles<'_>) -> bool {
        match self {
            Fragment::Equals { field, value } => field.value_of(recipe).equals(value),
            Fragment::MemberOf {
                field,
                values,
                negated,
            } => {
                let field_value = field.value_of(recipe);
                if matches!(field_value, FieldValue::Missing) {
                    return false;
                }
                let contained = values.iter().any(|v| field_value.equals(v));
                contained != *negated
            }
            Fragment::Like {
                field,
                pattern,
                negated,
            } => match field.value_of(recipe).to_text() {
                Some(text) => text.to_lowercase().contains(pattern) != *negated,
                None => false,
            },
            Fragment::AtLeast { field, value } => field.value_of(recipe).at_least(value),
            Fragment::RelatedContains {
                join,
                pattern,
                negated,
            } => {
                let hit = joins
                    .rows(*join)
                    .iter()
                    .any(|row| row.to_lowercase().contains(pattern));
                hit != *negated
            }
        }
    }
}

/// One established traversal per joined collection. Built once per recipe
/// before any fragment runs; every fragment against the same collection
/// reads the same handle.
struct JoinHandles<'a> {
    ingredients: Option<Vec<&'a str>>,
    instructions: Option<Vec<&'a str>>,
}

impl<'a> JoinHandles<'a> {
    fn establish(keys: &BTreeSet<JoinKey>, recipe: &'a Recipe) -> Self {
        Self {
            ingredients: keys
                .contains(&JoinKey::Ingredients)
                .then(|| recipe.ingredients.iter().map(|i| i.name.as_str()).collect()),
            instructions: keys.contains(&JoinKey::Instructions).then(|| {
                recipe
                    .instructions
                    .iter()
                    .map(|i| i.description.as_str())
                    .collect()
            }),
        }
    }

    fn rows(&self, key: JoinKey) -> &[&'a str] {
        match key {
            JoinKey::Ingredients => self.ingredients.as_deref().unwrap_or(&[]),
            JoinKey::Instructions => self.instructions.as_deref().unwrap_or(&[]),
        }
    }
}

/// The compiled conjunction of a criteria list.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipePredicate {
    fragments: Vec<Fragment>,
    joins: BTreeSet<JoinKey>,
}

impl RecipePredicate {
    /// Compile a criteria list. Fails fast on a key that names neither a
    /// root scalar field nor a known collection attribute.
    pub fn compile(criteria: &[SearchCriteria]) -> Result<Self, CriteriaError> {
        let fragments = criteria
            .iter()
            .map(Fragment::from_criterion)
            .collect::<Result<Vec<_>, _>>()?;
        let joins = fragments.iter().filter_map(Fragment::join_key).collect();
        Ok(Self { fragments, joins })
    }

    /// An empty criteria list compiles to the identity predicate.
    pub fn is_identity(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Distinct joined collections referenced by the fragments.
    pub fn join_keys(&self) -> &BTreeSet<JoinKey> {
        &self.joins
    }

    /// True iff the recipe satisfies every fragment.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let joins = JoinHandles::establish(&self.joins, recipe);
        self.fragments.iter().all(|f| f.eval(recipe, &joins))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Ingredient, Instruction};
    use serde_json::json;

    fn pasta() -> Recipe {
        Recipe {
            id: Some(1),
            name: "Pasta".to_string(),
            serving_number: 4,
            is_vegetarian: true,
            ingredients: [
                Ingredient {
                    id: Some(10),
                    name: "Tomato".to_string(),
                    recipe_id: Some(1),
                },
                Ingredient {
                    id: Some(11),
                    name: "Basil".to_string(),
                    recipe_id: Some(1),
                },
            ]
            .into_iter()
            .collect(),
            instructions: [Instruction {
                id: Some(20),
                description: "Boil water".to_string(),
                recipe_id: Some(1),
            }]
            .into_iter()
            .collect(),
        }
    }

    fn compile(criteria: &[SearchCriteria]) -> RecipePredicate {
        RecipePredicate::compile(criteria).unwrap()
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let predicate = compile(&[]);
        assert!(predicate.is_identity());
        assert!(predicate.matches(&pasta()));
    }

    #[test]
    fn test_equality_is_type_respecting() {
        let by_flag = compile(&[SearchCriteria::new(
            "isVegetarian",
            SearchOperation::Equality,
            json!(true),
        )]);
        assert!(by_flag.matches(&pasta()));

        let by_name = compile(&[SearchCriteria::new(
            "name",
            SearchOperation::Equality,
            json!("Pasta"),
        )]);
        assert!(by_name.matches(&pasta()));

        // Exact match only
        let wrong_case = compile(&[SearchCriteria::new(
            "name",
            SearchOperation::Equality,
            json!("pasta"),
        )]);
        assert!(!wrong_case.matches(&pasta()));
    }

    #[test]
    fn test_membership() {
        let included = compile(&[SearchCriteria::new(
            "name",
            SearchOperation::In,
            json!(["Pasta", "Soup"]),
        )]);
        assert!(included.matches(&pasta()));

        let excluded = compile(&[SearchCriteria::new(
            "name",
            SearchOperation::NotIn,
            json!(["Pasta", "Soup"]),
        )]);
        assert!(!excluded.matches(&pasta()));

        // A scalar value is a one-element collection
        let scalar = compile(&[SearchCriteria::new(
            "servingNumber",
            SearchOperation::In,
            json!(4),
        )]);
        assert!(scalar.matches(&pasta()));
    }

    #[test]
    fn test_like_is_case_insensitive_substring() {
        let predicate = compile(&[SearchCriteria::new(
            "name",
            SearchOperation::Like,
            json!("AST"),
        )]);
        assert!(predicate.matches(&pasta()));

        let miss = compile(&[SearchCriteria::new(
            "name",
            SearchOperation::Like,
            json!("rice"),
        )]);
        assert!(!miss.matches(&pasta()));
    }

    #[test]
    fn test_greater_or_equal_compares_numerically() {
        let at_four = compile(&[SearchCriteria::new(
            "servingNumber",
            SearchOperation::GreaterThanOrEqual,
            json!(4),
        )]);
        assert!(at_four.matches(&pasta()));

        let at_five = compile(&[SearchCriteria::new(
            "servingNumber",
            SearchOperation::GreaterThanOrEqual,
            json!(5),
        )]);
        assert!(!at_five.matches(&pasta()));

        // 10 >= 4 numerically even though "10" < "4" lexically
        let mut crowd = pasta();
        crowd.serving_number = 10;
        assert!(at_four.matches(&crowd));
    }

    #[test]
    fn test_contains_joins_to_ingredients() {
        let predicate = compile(&[SearchCriteria::new(
            "ingredientName",
            SearchOperation::Contains,
            json!("Tomato"),
        )]);
        assert_eq!(
            predicate.join_keys().iter().copied().collect::<Vec<_>>(),
            vec![JoinKey::Ingredients]
        );
        assert!(predicate.matches(&pasta()));

        // Both sides are lower-cased
        let shouted = compile(&[SearchCriteria::new(
            "ingredientName",
            SearchOperation::Contains,
            json!("TOMATO"),
        )]);
        assert!(shouted.matches(&pasta()));
    }

    #[test]
    fn test_contains_joins_to_instructions() {
        let predicate = compile(&[SearchCriteria::new(
            "description",
            SearchOperation::Contains,
            json!("boil"),
        )]);
        assert_eq!(
            predicate.join_keys().iter().copied().collect::<Vec<_>>(),
            vec![JoinKey::Instructions]
        );
        assert!(predicate.matches(&pasta()));
    }

    #[test]
    fn test_not_contains_means_no_row_contains() {
        let no_tomato = compile(&[SearchCriteria::new(
            "ingredientName",
            SearchOperation::NotContains,
            json!("Tomato"),
        )]);
        // Pasta has a Tomato row, so it is excluded even though Basil
        // does not contain the term.
        assert!(!no_tomato.matches(&pasta()));

        let no_rice = compile(&[SearchCriteria::new(
            "ingredientName",
            SearchOperation::NotContains,
            json!("rice"),
        )]);
        assert!(no_rice.matches(&pasta()));
    }

    #[test]
    fn test_repeated_relation_criteria_share_one_join() {
        let predicate = compile(&[
            SearchCriteria::new("ingredientName", SearchOperation::Contains, json!("Tomato")),
            SearchCriteria::new("ingredientName", SearchOperation::Contains, json!("Basil")),
            SearchCriteria::new("description", SearchOperation::Contains, json!("water")),
        ]);

        // Three fragments, two distinct joins
        assert_eq!(predicate.fragments().len(), 3);
        assert_eq!(predicate.join_keys().len(), 2);
        assert!(predicate.matches(&pasta()));
    }

    #[test]
    fn test_contains_fallback_matches_on_the_key() {
        // Root-field fallback: the pattern is the key string, not the value.
        let predicate = compile(&[SearchCriteria::new(
            "name",
            SearchOperation::Contains,
            json!("Pasta"),
        )]);
        // "Pasta" does not contain "name"
        assert!(!predicate.matches(&pasta()));

        let mut oddity = pasta();
        oddity.name = "Unnamed stew".to_string();
        // "Unnamed stew" does contain "name"
        assert!(predicate.matches(&oddity));
    }

    #[test]
    fn test_unknown_field_fails_fast() {
        let err = RecipePredicate::compile(&[SearchCriteria::new(
            "bogus",
            SearchOperation::Equality,
            json!(1),
        )])
        .unwrap_err();
        assert_eq!(err, CriteriaError::UnknownField("bogus".to_string()));
    }

    #[test]
    fn test_conjunction_requires_every_criterion() {
        let predicate = compile(&[
            SearchCriteria::new("isVegetarian", SearchOperation::Equality, json!(true)),
            SearchCriteria::new(
                "servingNumber",
                SearchOperation::GreaterThanOrEqual,
                json!(6),
            ),
        ]);
        assert!(!predicate.matches(&pasta()));
    }

    #[test]
    fn test_type_mismatch_is_no_match() {
        let predicate = compile(&[SearchCriteria::new(
            "servingNumber",
            SearchOperation::GreaterThanOrEqual,
            json!("plenty"),
        )]);
        assert!(!predicate.matches(&pasta()));
    }
}
