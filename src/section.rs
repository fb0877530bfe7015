//! Sections and Collections
//!
//! The four record collections, their endpoints, table columns and create
//! forms, and the navigation sections that show them.

use std::fmt;
use std::str::FromStr;

use crate::record::CellFormat;

/// A table column: which record key to read and how to label it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub format: CellFormat,
}

impl Column {
    const fn plain(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            format: CellFormat::Plain,
        }
    }

    const fn count(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            format: CellFormat::Count,
        }
    }
}

/// Input type of a create-form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

impl FieldKind {
    /// HTML input `type` attribute
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
        }
    }
}

/// One field of a creation form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
}

impl FieldSpec {
    const fn text(key: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
            placeholder,
        }
    }

    const fn number(key: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Number,
            placeholder,
        }
    }
}

/// A backend record collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Ingredient,
    Solvent,
    Formula,
    Batch,
}

const INGREDIENT_COLUMNS: &[Column] = &[
    Column::plain("name", "Name"),
    Column::plain("category", "Category"),
    Column::plain("supplier", "Supplier"),
    Column::plain("cas", "CAS"),
    Column::plain("stock_g", "Stock (g)"),
];

const SOLVENT_COLUMNS: &[Column] = &[
    Column::plain("name", "Name"),
    Column::plain("type", "Type"),
    Column::plain("purity_percent", "Purity %"),
    Column::plain("stock_ml", "Stock (mL)"),
];

const FORMULA_COLUMNS: &[Column] = &[
    Column::plain("name", "Name"),
    Column::plain("description", "Description"),
    Column::count("components", "Components (count)"),
];

const BATCH_COLUMNS: &[Column] = &[
    Column::plain("code", "Code"),
    Column::plain("formula_id", "Formula"),
    Column::plain("size_ml", "Size (mL)"),
    Column::plain("notes", "Notes"),
];

const INGREDIENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Name", "Bergamot"),
    FieldSpec::text("category", "Category", "Citrus"),
    FieldSpec::text("supplier", "Supplier", "Supplier name"),
    FieldSpec::text("cas", "CAS", "5989-27-5"),
    FieldSpec::number("stock_g", "Stock (g)", "500"),
];

const SOLVENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Name", "Ethanol"),
    FieldSpec::text("type", "Type", "Alcohol"),
    FieldSpec::number("purity_percent", "Purity %", "96"),
    FieldSpec::number("stock_ml", "Stock (mL)", "1000"),
];

const FORMULA_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Name", "Citrus Chypre"),
    FieldSpec::text("description", "Description", "Bright opening, mossy base"),
];

const BATCH_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("code", "Code", "B-2024-001"),
    FieldSpec::text("formula_id", "Formula", "Formula id"),
    FieldSpec::number("size_ml", "Size (mL)", "50"),
    FieldSpec::text("notes", "Notes", "Maceration started"),
];

impl Collection {
    /// All collections, in dashboard order
    pub const ALL: [Collection; 4] = [
        Collection::Ingredient,
        Collection::Formula,
        Collection::Batch,
        Collection::Solvent,
    ];

    /// REST path of the collection endpoint
    pub fn endpoint(self) -> &'static str {
        match self {
            Collection::Ingredient => "/api/ingredient",
            Collection::Solvent => "/api/solvent",
            Collection::Formula => "/api/formula",
            Collection::Batch => "/api/batch",
        }
    }

    /// Plural title, e.g. "Ingredients"
    pub fn title(self) -> &'static str {
        match self {
            Collection::Ingredient => "Ingredients",
            Collection::Solvent => "Solvents",
            Collection::Formula => "Formulas",
            Collection::Batch => "Batches",
        }
    }

    /// Singular noun, e.g. "Ingredient"
    pub fn singular(self) -> &'static str {
        match self {
            Collection::Ingredient => "Ingredient",
            Collection::Solvent => "Solvent",
            Collection::Formula => "Formula",
            Collection::Batch => "Batch",
        }
    }

    pub fn columns(self) -> &'static [Column] {
        match self {
            Collection::Ingredient => INGREDIENT_COLUMNS,
            Collection::Solvent => SOLVENT_COLUMNS,
            Collection::Formula => FORMULA_COLUMNS,
            Collection::Batch => BATCH_COLUMNS,
        }
    }

    pub fn create_fields(self) -> &'static [FieldSpec] {
        match self {
            Collection::Ingredient => INGREDIENT_FIELDS,
            Collection::Solvent => SOLVENT_FIELDS,
            Collection::Formula => FORMULA_FIELDS,
            Collection::Batch => BATCH_FIELDS,
        }
    }

    /// Look up a create field by key
    pub fn field(self, key: &str) -> Option<&'static FieldSpec> {
        self.create_fields().iter().find(|f| f.key == key)
    }

    /// Title and subtitle shown when the collection is empty
    pub fn empty_state(self) -> (&'static str, &'static str) {
        match self {
            Collection::Ingredient => (
                "No ingredients yet",
                "Add raw materials like essential oils, aroma chemicals, and absolutes.",
            ),
            Collection::Solvent => (
                "No solvents yet",
                "Track ethanol, DPG, IPM and other solvents used for compounding.",
            ),
            Collection::Formula => (
                "No formulas yet",
                "Design your perfume concentrate formulas and their components.",
            ),
            Collection::Batch => (
                "No batches yet",
                "Record produced batches, their size and notes.",
            ),
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Error parsing a collection name
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown collection '{0}'. Use: ingredient, solvent, formula, batch")]
pub struct UnknownCollection(pub String);

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ingredient" | "ingredients" => Ok(Collection::Ingredient),
            "solvent" | "solvents" => Ok(Collection::Solvent),
            "formula" | "formulas" => Ok(Collection::Formula),
            "batch" | "batches" => Ok(Collection::Batch),
            _ => Err(UnknownCollection(s.to_string())),
        }
    }
}

/// A navigation section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Ingredients,
    Formulas,
    Batches,
    Solvents,
}

impl Section {
    /// Sidebar order
    pub const ALL: [Section; 5] = [
        Section::Dashboard,
        Section::Ingredients,
        Section::Formulas,
        Section::Batches,
        Section::Solvents,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Dashboard => "Overview",
            Section::Ingredients => "Ingredients",
            Section::Formulas => "Formulas",
            Section::Batches => "Batches",
            Section::Solvents => "Solvents",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Dashboard => "✨",
            Section::Ingredients => "🧪",
            Section::Formulas => "📚",
            Section::Batches => "⚗️",
            Section::Solvents => "💧",
        }
    }

    /// Collection shown by this section, `None` for the dashboard
    pub fn collection(self) -> Option<Collection> {
        match self {
            Section::Dashboard => None,
            Section::Ingredients => Some(Collection::Ingredient),
            Section::Formulas => Some(Collection::Formula),
            Section::Batches => Some(Collection::Batch),
            Section::Solvents => Some(Collection::Solvent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(Collection::Ingredient.endpoint(), "/api/ingredient");
        assert_eq!(Collection::Solvent.endpoint(), "/api/solvent");
        assert_eq!(Collection::Formula.endpoint(), "/api/formula");
        assert_eq!(Collection::Batch.endpoint(), "/api/batch");
    }

    #[test]
    fn test_ingredient_columns_order() {
        let keys: Vec<_> = Collection::Ingredient.columns().iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["name", "category", "supplier", "cas", "stock_g"]);
    }

    #[test]
    fn test_numeric_fields() {
        let numeric: Vec<_> = Collection::Solvent
            .create_fields()
            .iter()
            .filter(|f| f.kind == FieldKind::Number)
            .map(|f| f.key)
            .collect();
        assert_eq!(numeric, vec!["purity_percent", "stock_ml"]);
        assert_eq!(Collection::Batch.field("size_ml").map(|f| f.kind), Some(FieldKind::Number));
        assert!(Collection::Batch.field("unknown").is_none());
    }

    #[test]
    fn test_parse_collection() {
        assert_eq!("ingredients".parse::<Collection>(), Ok(Collection::Ingredient));
        assert_eq!("Batch".parse::<Collection>(), Ok(Collection::Batch));
        assert!("resin".parse::<Collection>().is_err());
    }

    #[test]
    fn test_section_collection_mapping() {
        assert_eq!(Section::Dashboard.collection(), None);
        for section in Section::ALL.into_iter().skip(1) {
            let collection = section.collection().unwrap();
            assert_eq!(collection.title(), section.label());
        }
    }
}
