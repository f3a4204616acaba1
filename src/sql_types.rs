use serde::Deserialize;
use std::sync::Arc;

fn default_true() -> bool {
    true
}

#[derive(Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct ColumnDirectives {
    /// Text name -> field name conversion
    #[serde(default = "default_true")]
    pub inflect_names: bool,

    #[serde(default)]
    pub name: Option<String>,
}

impl Default for ColumnDirectives {
    fn default() -> Self {
        Self {
            inflect_names: true,
            name: None,
        }
    }
}

#[derive(Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct Column {
    pub name: String,
    pub type_name: String,
    #[serde(default)]
    pub is_not_null: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub directives: ColumnDirectives,
}

#[derive(Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct Index {
    pub column_names: Vec<String>,
    pub is_unique: bool,
    pub is_primary_key: bool,
}

#[derive(Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct TableDirectives {
    /// Text name -> type name conversion
    #[serde(default = "default_true")]
    pub inflect_names: bool,

    #[serde(default)]
    pub name: Option<String>,
}

impl Default for TableDirectives {
    fn default() -> Self {
        Self {
            inflect_names: true,
            name: None,
        }
    }
}

#[derive(Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct Table {
    /// Identifies the table through renames. Two tables sharing a name are
    /// still distinct when their oids differ.
    pub oid: u32,
    pub name: String,
    pub columns: Vec<Arc<Column>>,
    #[serde(default)]
    pub indexes: Vec<Index>,
    #[serde(default)]
    pub directives: TableDirectives,
}

impl Table {
    pub fn primary_key(&self) -> Option<&Index> {
        self.indexes.iter().find(|index| index.is_primary_key)
    }

    /// Primary key columns in index order. Key members that no longer match a
    /// column are skipped.
    pub fn primary_key_columns(&self) -> Vec<&Arc<Column>> {
        self.primary_key()
            .map(|index| index.column_names.clone())
            .unwrap_or_default()
            .iter()
            .filter_map(|col_name| self.columns.iter().find(|col| &col.name == col_name))
            .collect::<Vec<&Arc<Column>>>()
    }
}
