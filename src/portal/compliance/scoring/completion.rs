use std::collections::BTreeSet;

use serde::Serialize;

use super::super::catalog::{CategoryCatalog, EsgCategory};
use super::super::domain::{CategoryId, Document};

/// Checklist progress for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCompletion {
    pub satisfied: usize,
    pub total: usize,
}

impl CategoryCompletion {
    /// Fraction of the checklist covered. A category with no required
    /// documents is vacuously complete, so the ratio is 1.0 rather than
    /// a division by zero.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.satisfied as f64 / self.total as f64
        }
    }

    /// Integer comparison on purpose: float equality on `ratio()` would be
    /// fragile for checklists whose ratio is not exactly representable.
    pub fn is_complete(&self) -> bool {
        self.satisfied == self.total
    }

    pub fn percentage(&self) -> f64 {
        self.ratio() * 100.0
    }
}

/// Documents filed under the given category, in upload order.
pub fn documents_for_category(documents: &[Document], category: CategoryId) -> Vec<&Document> {
    documents
        .iter()
        .filter(|document| document.category == category)
        .collect()
}

/// Checklist progress for a category: a required label is satisfied when at
/// least one document of that exact type exists. Re-uploads of the same
/// type count once (set semantics).
pub fn completion_for_category(
    documents: &[Document],
    category: &EsgCategory,
) -> CategoryCompletion {
    let uploaded_types: BTreeSet<&str> = documents_for_category(documents, category.id)
        .into_iter()
        .map(|document| document.document_type.as_str())
        .collect();

    let satisfied = category
        .required_documents
        .iter()
        .filter(|required| uploaded_types.contains(**required))
        .count();

    CategoryCompletion {
        satisfied,
        total: category.required_documents.len(),
    }
}

/// Mean of per-category completion ratios, each category weighted equally
/// regardless of checklist length. An empty catalog follows the same
/// vacuous-completeness convention as an empty checklist.
pub fn overall_completion(documents: &[Document], catalog: &CategoryCatalog) -> f64 {
    let categories = catalog.categories();
    if categories.is_empty() {
        return 1.0;
    }

    let sum: f64 = categories
        .iter()
        .map(|category| completion_for_category(documents, category).ratio())
        .sum();

    sum / categories.len() as f64
}
