use crate::ordering::OrderingEnum;
use crate::sql_types::{Column, Table};
use indexmap::IndexMap;
use itertools::Itertools;
use std::sync::Arc;

fn to_base_type_name(
    table_name: &str,
    name_override: &Option<String>,
    inflect_names: bool,
) -> String {
    match name_override {
        Some(name) => return name.to_string(),
        None => (),
    };

    match inflect_names {
        false => table_name.to_string(),
        true => {
            let mut padded = "+".to_string();
            padded.push_str(table_name);

            // account_BY_email => Account_By_Email
            let casing: String = padded
                .chars()
                .zip(table_name.chars())
                .map(|(prev, cur)| match prev.is_alphanumeric() {
                    true => cur.to_string(),
                    false => cur.to_uppercase().to_string(),
                })
                .collect();

            str::replace(&casing, "_", "")
        }
    }
}

fn lowercase_first_letter(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

// firstName => FIRST_NAME
pub(crate) fn upper_snake_case(field_name: &str) -> String {
    let mut padded = "+".to_string();
    padded.push_str(field_name);

    let snake: String = padded
        .chars()
        .zip(field_name.chars())
        .flat_map(
            |(prev, cur)| match cur.is_uppercase() && prev.is_alphanumeric() && !prev.is_uppercase()
            {
                true => vec!['_', cur],
                false => vec![cur],
            },
        )
        .map(|c| match c.is_alphanumeric() {
            true => c.to_ascii_uppercase(),
            false => '_',
        })
        .coalesce(|prev, cur| match (prev, cur) {
            ('_', '_') => Ok('_'),
            _ => Err((prev, cur)),
        })
        .collect();

    snake.trim_matches('_').to_string()
}

impl Table {
    pub fn graphql_base_type_name(&self) -> String {
        to_base_type_name(
            &self.name,
            &self.directives.name,
            self.directives.inflect_names,
        )
    }

    /// Type name quoted for use in generated descriptions
    pub fn graphql_markdown_type_name(&self) -> String {
        format!("`{}`", self.graphql_base_type_name())
    }
}

impl Column {
    pub fn graphql_field_name(&self) -> String {
        if let Some(override_name) = &self.directives.name {
            return override_name.clone();
        }

        let base_type_name = to_base_type_name(
            &self.name,
            &self.directives.name,
            self.directives.inflect_names,
        );

        match self.directives.inflect_names {
            // Lowercase first letter
            // AccountByEmail => accountByEmail
            true => lowercase_first_letter(&base_type_name),
            false => base_type_name,
        }
    }

    /// Field name quoted for use in generated descriptions
    pub fn graphql_markdown_field_name(&self) -> String {
        format!("`{}`", self.graphql_field_name())
    }
}

pub trait ___Type {
    // kind: __TypeKind!
    fn kind(&self) -> __TypeKind;

    // name: String
    fn name(&self) -> Option<String> {
        None
    }

    // description: String
    fn description(&self) -> Option<String> {
        None
    }

    // # ENUM only
    // enumValues(includeDeprecated: Boolean = false): [__EnumValue!]
    fn enum_values(&self, _include_deprecated: bool) -> Option<Vec<__EnumValue>> {
        None
    }

    // # NON_NULL and LIST only
    // ofType: __Type
    fn of_type(&self) -> Option<__Type> {
        None
    }
}

#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum __TypeKind {
    SCALAR,
    ENUM,
    LIST,
    NON_NULL,
}

#[derive(Clone, Debug)]
pub struct __EnumValue {
    name: String,
    description: Option<String>,
    deprecation_reason: Option<String>,
}

impl __EnumValue {
    // name: String!
    pub fn name(&self) -> String {
        self.name.clone()
    }

    // description: String
    pub fn description(&self) -> Option<String> {
        self.description.clone()
    }

    // isDeprecated: Boolean!
    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }

    // deprecationReason: String
    pub fn deprecation_reason(&self) -> Option<String> {
        self.deprecation_reason.clone()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum __Type {
    Scalar(Scalar),
    Ordering(OrderingType),
    // Modifiers
    List(ListType),
    NonNull(NonNullType),
}

impl ___Type for __Type {
    // kind: __TypeKind!
    fn kind(&self) -> __TypeKind {
        match self {
            Self::Scalar(x) => x.kind(),
            Self::Ordering(x) => x.kind(),
            Self::List(x) => x.kind(),
            Self::NonNull(x) => x.kind(),
        }
    }

    // name: String
    fn name(&self) -> Option<String> {
        match self {
            Self::Scalar(x) => x.name(),
            Self::Ordering(x) => x.name(),
            Self::List(x) => x.name(),
            Self::NonNull(x) => x.name(),
        }
    }

    // description: String
    fn description(&self) -> Option<String> {
        match self {
            Self::Scalar(x) => x.description(),
            Self::Ordering(x) => x.description(),
            Self::List(x) => x.description(),
            Self::NonNull(x) => x.description(),
        }
    }

    // enumValues(includeDeprecated: Boolean = false): [__EnumValue!]
    fn enum_values(&self, include_deprecated: bool) -> Option<Vec<__EnumValue>> {
        match self {
            Self::Scalar(x) => x.enum_values(include_deprecated),
            Self::Ordering(x) => x.enum_values(include_deprecated),
            Self::List(x) => x.enum_values(include_deprecated),
            Self::NonNull(x) => x.enum_values(include_deprecated),
        }
    }

    // ofType: __Type
    fn of_type(&self) -> Option<__Type> {
        match self {
            Self::Scalar(x) => x.of_type(),
            Self::Ordering(x) => x.of_type(),
            Self::List(x) => x.of_type(),
            Self::NonNull(x) => x.of_type(),
        }
    }
}

impl __Type {
    /// Unwraps the List and NonNull modifiers to return a concrete __Type
    pub fn unmodified_type(&self) -> Self {
        match self {
            __Type::List(x) => x.type_.unmodified_type(),
            __Type::NonNull(x) => x.type_.unmodified_type(),
            _ => self.clone(),
        }
    }

    pub fn nullable_type(&self) -> Self {
        match self {
            __Type::NonNull(x) => (*x.type_).clone(),
            _ => self.clone(),
        }
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Scalar {
    Int,
    Float,
    String,
    Boolean,
    Date,
    Time,
    Datetime,
    BigInt,
    UUID,
    JSON,
    Cursor,
}

impl ___Type for Scalar {
    fn kind(&self) -> __TypeKind {
        __TypeKind::SCALAR
    }

    fn name(&self) -> Option<String> {
        Some(format!("{:?}", self))
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListType {
    pub type_: Box<__Type>,
}

impl ___Type for ListType {
    fn kind(&self) -> __TypeKind {
        __TypeKind::LIST
    }

    fn name(&self) -> Option<String> {
        None
    }

    fn of_type(&self) -> Option<__Type> {
        Some((*(self.type_)).clone())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NonNullType {
    pub type_: Box<__Type>,
}

impl ___Type for NonNullType {
    fn kind(&self) -> __TypeKind {
        __TypeKind::NON_NULL
    }

    fn name(&self) -> Option<String> {
        None
    }

    fn of_type(&self) -> Option<__Type> {
        Some((*(self.type_)).clone())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderingType {
    pub enum_: Arc<OrderingEnum>,
}

impl ___Type for OrderingType {
    fn kind(&self) -> __TypeKind {
        __TypeKind::ENUM
    }

    fn name(&self) -> Option<String> {
        Some(self.enum_.name.clone())
    }

    fn description(&self) -> Option<String> {
        self.enum_.description.clone()
    }

    fn enum_values(&self, _include_deprecated: bool) -> Option<Vec<__EnumValue>> {
        Some(
            self.enum_
                .values
                .iter()
                .map(|(key, value)| __EnumValue {
                    name: key.clone(),
                    description: value.description.clone(),
                    deprecation_reason: None,
                })
                .collect(),
        )
    }
}

#[derive(Clone, Debug)]
pub struct __InputValue {
    pub name_: String,
    pub type_: __Type,
    pub description: Option<String>,
    pub default_value: Option<String>,

    // Only set for column backed filter arguments
    pub sql_column: Option<Arc<Column>>,
}

impl __InputValue {
    // name: String!
    pub fn name(&self) -> String {
        self.name_.clone()
    }

    // description: String
    pub fn description(&self) -> Option<String> {
        self.description.clone()
    }

    // type: __Type!
    pub fn type_(&self) -> __Type {
        self.type_.clone()
    }

    // defaultValue: String
    pub fn default_value(&self) -> Option<String> {
        self.default_value.clone()
    }

    // isDeprecated: Boolean!
    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason().is_some()
    }

    // deprecationReason: String
    pub fn deprecation_reason(&self) -> Option<String> {
        None
    }
}

/// Arguments keyed by argument name, iterating in insertion order
pub type ArgumentMap = IndexMap<String, __InputValue>;

pub fn sql_type_to_graphql_type(type_name: &str) -> __Type {
    match type_name {
        "bool" | "boolean" => __Type::Scalar(Scalar::Boolean),
        "int2" | "smallint" | "int4" | "integer" | "int" => __Type::Scalar(Scalar::Int),
        "int8" | "bigint" => __Type::Scalar(Scalar::BigInt),
        "float4" | "real" | "float8" | "double precision" | "numeric" | "decimal" => {
            __Type::Scalar(Scalar::Float)
        }
        "text" | "varchar" | "character varying" | "char" | "character" | "name" | "citext" => {
            __Type::Scalar(Scalar::String)
        }
        "date" => __Type::Scalar(Scalar::Date),
        "time" | "time without time zone" | "time with time zone" | "timetz" => {
            __Type::Scalar(Scalar::Time)
        }
        "timestamp" | "timestamp without time zone" | "timestamp with time zone" | "timestamptz" => {
            __Type::Scalar(Scalar::Datetime)
        }
        "uuid" => __Type::Scalar(Scalar::UUID),
        "json" | "jsonb" => __Type::Scalar(Scalar::JSON),
        _ => match type_name.strip_suffix("[]") {
            Some(element_type_name) => __Type::List(ListType {
                type_: Box::new(sql_type_to_graphql_type(element_type_name)),
            }),
            None => __Type::Scalar(Scalar::String),
        },
    }
}

pub fn sql_column_to_graphql_type(col: &Column) -> __Type {
    let type_ = sql_type_to_graphql_type(col.type_name.as_str());
    match col.is_not_null {
        true => __Type::NonNull(NonNullType {
            type_: Box::new(type_),
        }),
        false => type_,
    }
}
