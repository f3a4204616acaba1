//! Argument schema for paginated connection queries over tabular data.
//!
//! Given table metadata, [`connection_args`] produces the ordered argument
//! set for a table's connection field: pagination arguments and an `orderBy`
//! enum that doubles as the cursor sort domain, followed by one equality
//! filter per exposed column. Ordering enums are memoized per table so
//! repeated schema builds hand out one shared instance.

pub mod args;
pub mod cursor;
pub mod error;
pub mod graphql;
pub mod ordering;
pub mod sql_types;

pub use args::{column_filter_args, connection_args};
pub use cursor::{Cursor, CursorElement};
pub use error::{GraphQLError, GraphQLResult};
pub use graphql::{
    sql_column_to_graphql_type, sql_type_to_graphql_type, ArgumentMap, ListType, NonNullType,
    OrderingType, Scalar, __EnumValue, __InputValue, __Type, __TypeKind, ___Type,
};
pub use ordering::{table_ordering_enum, OrderingEnum, OrderingEnumValue};
pub use sql_types::{Column, ColumnDirectives, Index, Table, TableDirectives};
