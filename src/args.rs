use crate::graphql::{
    sql_column_to_graphql_type, ArgumentMap, OrderingType, Scalar, __InputValue, __Type,
};
use crate::ordering::table_ordering_enum;
use crate::sql_types::{Column, Table};
use std::sync::Arc;

fn insert_arg(args: &mut ArgumentMap, value: __InputValue) {
    args.insert(value.name_.clone(), value);
}

/// First primary key column's storage name, when the table has a primary key
fn default_order_by_value(table: &Table) -> Option<String> {
    table
        .primary_key_columns()
        .first()
        .map(|column| column.name.clone())
}

/// Builds the argument set for a table's connection field. The fixed
/// pagination arguments come first, in a stable order, followed by one
/// equality filter per column not named in `ignored_columns`.
///
/// The column selected by `orderBy` means more than just the order to return
/// items in. It is also the column cursors are built from.
pub fn connection_args(table: &Table, ignored_columns: &[Arc<Column>]) -> ArgumentMap {
    let mut args = ArgumentMap::new();

    insert_arg(
        &mut args,
        __InputValue {
            name_: "orderBy".to_string(),
            type_: __Type::Ordering(OrderingType {
                enum_: table_ordering_enum(table),
            }),
            description: Some(
                "The order the resulting items should be returned in. This argument \
                 is also important as it is used in creating pagination cursors. This \
                 value's default is the primary key for the object."
                    .to_string(),
            ),
            default_value: default_order_by_value(table),
            sql_column: None,
        },
    );

    insert_arg(
        &mut args,
        __InputValue {
            name_: "first".to_string(),
            type_: __Type::Scalar(Scalar::Int),
            description: Some(
                "The top `n` items in the set to be returned. Can't be used with `last`."
                    .to_string(),
            ),
            default_value: None,
            sql_column: None,
        },
    );

    insert_arg(
        &mut args,
        __InputValue {
            name_: "last".to_string(),
            type_: __Type::Scalar(Scalar::Int),
            description: Some(
                "The bottom `n` items in the set to be returned. Can't be used with `first`."
                    .to_string(),
            ),
            default_value: None,
            sql_column: None,
        },
    );

    insert_arg(
        &mut args,
        __InputValue {
            name_: "before".to_string(),
            type_: __Type::Scalar(Scalar::Cursor),
            description: Some(
                "Constrains the set to nodes *before* this cursor in the specified ordering."
                    .to_string(),
            ),
            default_value: None,
            sql_column: None,
        },
    );

    insert_arg(
        &mut args,
        __InputValue {
            name_: "after".to_string(),
            type_: __Type::Scalar(Scalar::Cursor),
            description: Some(
                "Constrains the set to nodes *after* this cursor in the specified ordering."
                    .to_string(),
            ),
            default_value: None,
            sql_column: None,
        },
    );

    insert_arg(
        &mut args,
        __InputValue {
            name_: "offset".to_string(),
            type_: __Type::Scalar(Scalar::Int),
            description: Some(
                "An integer offset representing how many items to skip in the set.".to_string(),
            ),
            default_value: None,
            sql_column: None,
        },
    );

    insert_arg(
        &mut args,
        __InputValue {
            name_: "descending".to_string(),
            type_: __Type::Scalar(Scalar::Boolean),
            description: Some(
                "If `true` the nodes will be in descending order, if `false` the \
                 items will be in ascending order. `false` by default."
                    .to_string(),
            ),
            default_value: Some("false".to_string()),
            sql_column: None,
        },
    );

    args.extend(column_filter_args(&table.columns, ignored_columns));
    args
}

/// One equality filter argument per column, keyed by the column's field name.
/// Membership in `ignored_columns` is decided by identity, so a column that
/// merely shares a name with an ignored one still gets a filter. Filter
/// argument types are always nullable, an omitted filter applies no
/// constraint.
pub fn column_filter_args(columns: &[Arc<Column>], ignored_columns: &[Arc<Column>]) -> ArgumentMap {
    let mut args = ArgumentMap::new();

    for column in columns {
        if ignored_columns
            .iter()
            .any(|ignored| Arc::ptr_eq(ignored, column))
        {
            continue;
        }

        insert_arg(
            &mut args,
            __InputValue {
                name_: column.graphql_field_name(),
                type_: sql_column_to_graphql_type(column).nullable_type(),
                description: Some(format!(
                    "Filters the resulting set with an equality test on the {} field.",
                    column.graphql_markdown_field_name()
                )),
                default_value: None,
                sql_column: Some(Arc::clone(column)),
            },
        );
    }

    args
}
