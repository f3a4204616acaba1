use crate::graphql::upper_snake_case;
use crate::sql_types::Table;
use cached::proc_macro::cached;
use cached::UnboundCache;
use indexmap::IndexMap;
use std::sync::Arc;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderingEnumValue {
    /// Storage column name emitted when this member is selected
    pub sort_value: String,
    pub description: Option<String>,
}

/// Enum type listing every column of a table as an orderable property.
/// `values` iterates in table column order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderingEnum {
    pub name: String,
    pub description: Option<String>,
    pub values: IndexMap<String, OrderingEnumValue>,
}

// One member per column, keyed by the upper snake case form of the column's
// field name. When two columns produce the same key, the later column's
// payload wins and the member keeps the earlier column's position.
// TODO: Some way to eliminate some columns from the ordering enum?
fn build_ordering_enum(table: &Table) -> OrderingEnum {
    let mut values = IndexMap::with_capacity(table.columns.len());
    for column in &table.columns {
        values.insert(
            upper_snake_case(&column.graphql_field_name()),
            OrderingEnumValue {
                sort_value: column.name.clone(),
                description: column.description.clone(),
            },
        );
    }

    OrderingEnum {
        name: format!("{}Ordering", table.graphql_base_type_name()),
        description: Some(format!(
            "Properties with which {} can be ordered.",
            table.graphql_markdown_type_name()
        )),
        values,
    }
}

/// Memoized on the table's oid. Repeated calls for the same table hand out
/// the same shared instance, so schema registrars that dedupe types by
/// reference see one enum per table. The cache lock is held while an absent
/// entry is built, making the lookup and insert a single atomic step.
#[cached(
    type = "UnboundCache<u32, Arc<OrderingEnum>>",
    create = "{ UnboundCache::new() }",
    convert = r#"{ table.oid }"#,
    sync_writes = true
)]
pub fn table_ordering_enum(table: &Table) -> Arc<OrderingEnum> {
    Arc::new(build_ordering_enum(table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql_types::{Column, ColumnDirectives, TableDirectives};

    fn column(name: &str, description: Option<&str>) -> Arc<Column> {
        Arc::new(Column {
            name: name.to_string(),
            type_name: "text".to_string(),
            is_not_null: false,
            description: description.map(|d| d.to_string()),
            directives: ColumnDirectives::default(),
        })
    }

    fn table(oid: u32, name: &str, columns: Vec<Arc<Column>>) -> Table {
        Table {
            oid,
            name: name.to_string(),
            columns,
            indexes: vec![],
            directives: TableDirectives::default(),
        }
    }

    #[test]
    fn ordering_enum_members_test() {
        let table = table(
            9101,
            "account",
            vec![
                column("id", None),
                column("first_name", Some("Given name")),
                column("last_name", None),
            ],
        );

        let ordering = build_ordering_enum(&table);
        assert_eq!(ordering.name, "AccountOrdering");
        assert_eq!(
            ordering.description,
            Some("Properties with which `Account` can be ordered.".to_string())
        );

        let keys: Vec<&str> = ordering.values.keys().map(|key| key.as_str()).collect();
        assert_eq!(keys, vec!["ID", "FIRST_NAME", "LAST_NAME"]);

        let first_name = &ordering.values["FIRST_NAME"];
        assert_eq!(first_name.sort_value, "first_name");
        assert_eq!(first_name.description, Some("Given name".to_string()));
    }

    #[test]
    fn ordering_enum_ignores_no_columns_test() {
        // Columns excluded from filtering still order the set
        let table = table(9102, "account", vec![column("secret_rank", None)]);
        let ordering = build_ordering_enum(&table);
        assert!(ordering.values.contains_key("SECRET_RANK"));
    }

    #[test]
    fn ordering_enum_empty_table_test() {
        let table = table(9103, "empty_relation", vec![]);
        let ordering = build_ordering_enum(&table);
        assert_eq!(ordering.name, "EmptyRelationOrdering");
        assert!(ordering.values.is_empty());
    }

    #[test]
    fn colliding_keys_keep_first_position_last_payload_test() {
        let table = table(
            9104,
            "account",
            vec![
                column("user_id", Some("Snake case form")),
                column("email", None),
                column("userId", Some("Camel case form")),
            ],
        );

        let ordering = build_ordering_enum(&table);
        let keys: Vec<&str> = ordering.values.keys().map(|key| key.as_str()).collect();
        assert_eq!(keys, vec!["USER_ID", "EMAIL"]);

        let user_id = &ordering.values["USER_ID"];
        assert_eq!(user_id.sort_value, "userId");
        assert_eq!(user_id.description, Some("Camel case form".to_string()));
    }

    #[test]
    fn same_table_returns_same_instance_test() {
        let table = table(9105, "account", vec![column("id", None)]);
        let first = table_ordering_enum(&table);
        let second = table_ordering_enum(&table);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn distinct_tables_same_name_test() {
        let columns = vec![column("id", None)];
        let in_public = table(9106, "account", columns.clone());
        let in_private = table(9107, "account", columns);

        let public_enum = table_ordering_enum(&in_public);
        let private_enum = table_ordering_enum(&in_private);

        assert!(!Arc::ptr_eq(&public_enum, &private_enum));
        assert_eq!(public_enum.name, "AccountOrdering");
        assert_eq!(private_enum.name, "AccountOrdering");
    }

    #[test]
    fn renamed_table_keeps_cached_instance_test() {
        let original = table(9108, "old_name", vec![column("id", None)]);
        let first = table_ordering_enum(&original);

        let mut renamed = original.clone();
        renamed.name = "new_name".to_string();
        let second = table_ordering_enum(&renamed);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.name, "OldNameOrdering");
    }

    #[test]
    fn concurrent_calls_share_one_instance_test() {
        let table = Arc::new(table(
            9109,
            "account",
            vec![column("id", None), column("email", None)],
        ));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let table = Arc::clone(&table);
                std::thread::spawn(move || table_ordering_enum(&table))
            })
            .collect();

        let enums: Vec<Arc<OrderingEnum>> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        for ordering in &enums[1..] {
            assert!(Arc::ptr_eq(&enums[0], ordering));
        }
    }
}
