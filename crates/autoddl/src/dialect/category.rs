//! Semantic type categories and the classification chain.
//!
//! Every column is classified into exactly one [`TypeCategory`] before a
//! dialect picks a SQL type for it. Classification walks an ordered list of
//! rules and returns the first match, so overlapping rules (a `String` field
//! can be TEXT or STRING) resolve by position:
//!
//! ```text
//! TEXT → STRING → CHAR → DATETIME → DATE → TIME → INT → DOUBLE → DECIMAL → LONG → BOOLEAN
//! ```
//!
//! Unknown types fall back to STRING and never fail.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::GeneratorConfig;
use crate::core::schema::{simple_name, ColumnDescriptor};
use crate::core::DatabaseType;

/// Dialect-independent classification of a source field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TypeCategory {
    /// Unbounded character data.
    Text,
    /// Bounded character data.
    String,
    /// A single character.
    Char,
    /// Date with time of day.
    DateTime,
    /// Date only.
    Date,
    /// Time of day only.
    Time,
    /// 32-bit (or narrower) integer.
    Int,
    /// Binary floating point.
    Double,
    /// Arbitrary-precision decimal.
    Decimal,
    /// 64-bit integer.
    Long,
    /// Boolean.
    Boolean,
}

impl TypeCategory {
    /// Every category, in classification priority order.
    pub const ALL: [TypeCategory; 11] = [
        TypeCategory::Text,
        TypeCategory::String,
        TypeCategory::Char,
        TypeCategory::DateTime,
        TypeCategory::Date,
        TypeCategory::Time,
        TypeCategory::Int,
        TypeCategory::Double,
        TypeCategory::Decimal,
        TypeCategory::Long,
        TypeCategory::Boolean,
    ];

    /// Category assigned when no rule matches.
    pub const FALLBACK: TypeCategory = TypeCategory::String;

    /// The source types belonging to this category.
    ///
    /// TEXT has no types of its own; it is a promotion of STRING.
    pub fn family(&self) -> &'static TypeFamily {
        match self {
            TypeCategory::Text | TypeCategory::String => &STRING_TYPES,
            TypeCategory::Char => &CHAR_TYPES,
            TypeCategory::DateTime => &DATETIME_TYPES,
            TypeCategory::Date => &DATE_TYPES,
            TypeCategory::Time => &TIME_TYPES,
            TypeCategory::Int => &INT_TYPES,
            TypeCategory::Double => &DOUBLE_TYPES,
            TypeCategory::Decimal => &DECIMAL_TYPES,
            TypeCategory::Long => &LONG_TYPES,
            TypeCategory::Boolean => &BOOLEAN_TYPES,
        }
    }
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeCategory::Text => "TEXT",
            TypeCategory::String => "STRING",
            TypeCategory::Char => "CHAR",
            TypeCategory::DateTime => "DATETIME",
            TypeCategory::Date => "DATE",
            TypeCategory::Time => "TIME",
            TypeCategory::Int => "INT",
            TypeCategory::Double => "DOUBLE",
            TypeCategory::Decimal => "DECIMAL",
            TypeCategory::Long => "LONG",
            TypeCategory::Boolean => "BOOLEAN",
        };
        f.write_str(name)
    }
}

/// A set of source type names, split into namespace-qualified names and
/// bare simple names.
///
/// A qualified source type (`java.sql.Date`) is only compared against the
/// qualified list, so `java.sql.Date` and `java.util.Date` can land in
/// different categories while a bare `Date` still resolves.
#[derive(Debug)]
pub struct TypeFamily {
    pub qualified: &'static [&'static str],
    pub simple: &'static [&'static str],
}

impl TypeFamily {
    pub fn contains(&self, source_type: &str) -> bool {
        let name = source_type.trim();
        if name.contains('.') {
            self.qualified.contains(&name)
        } else {
            self.simple.contains(&simple_name(name))
        }
    }
}

static STRING_TYPES: TypeFamily = TypeFamily {
    qualified: &[
        "java.lang.String",
        "java.lang.CharSequence",
        "kotlin.String",
        "kotlin.CharSequence",
    ],
    simple: &["String", "CharSequence"],
};

static CHAR_TYPES: TypeFamily = TypeFamily {
    qualified: &["java.lang.Character", "kotlin.Char"],
    simple: &["char", "Character", "Char"],
};

static DATETIME_TYPES: TypeFamily = TypeFamily {
    qualified: &[
        "java.time.LocalDateTime",
        "java.time.ZonedDateTime",
        "java.time.OffsetDateTime",
        "java.time.Instant",
        "java.util.Date",
        "java.sql.Timestamp",
        "cn.hutool.core.date.DateTime",
        "kotlinx.datetime.LocalDateTime",
        "kotlinx.datetime.Instant",
    ],
    simple: &[
        "LocalDateTime",
        "ZonedDateTime",
        "OffsetDateTime",
        "Instant",
        "Date",
        "Timestamp",
        "DateTime",
    ],
};

static DATE_TYPES: TypeFamily = TypeFamily {
    qualified: &["java.time.LocalDate", "java.sql.Date", "kotlinx.datetime.LocalDate"],
    simple: &["LocalDate"],
};

static TIME_TYPES: TypeFamily = TypeFamily {
    qualified: &[
        "java.time.LocalTime",
        "java.time.OffsetTime",
        "java.sql.Time",
        "kotlinx.datetime.LocalTime",
    ],
    simple: &["LocalTime", "OffsetTime", "Time"],
};

static INT_TYPES: TypeFamily = TypeFamily {
    qualified: &[
        "java.lang.Integer",
        "java.lang.Short",
        "java.lang.Byte",
        "kotlin.Int",
        "kotlin.Short",
        "kotlin.Byte",
    ],
    simple: &["int", "Integer", "Int", "short", "Short", "byte", "Byte"],
};

static DOUBLE_TYPES: TypeFamily = TypeFamily {
    qualified: &[
        "java.lang.Double",
        "java.lang.Float",
        "kotlin.Double",
        "kotlin.Float",
    ],
    simple: &["double", "Double", "float", "Float"],
};

static DECIMAL_TYPES: TypeFamily = TypeFamily {
    qualified: &["java.math.BigDecimal", "java.math.BigInteger"],
    simple: &["BigDecimal", "BigInteger"],
};

static LONG_TYPES: TypeFamily = TypeFamily {
    qualified: &["java.lang.Long", "kotlin.Long"],
    simple: &["long", "Long"],
};

static BOOLEAN_TYPES: TypeFamily = TypeFamily {
    qualified: &["java.lang.Boolean", "kotlin.Boolean"],
    simple: &["boolean", "Boolean"],
};

/// Inputs a rule may consult besides the column itself.
struct RuleContext<'a> {
    config: &'a GeneratorConfig,
    dialect: DatabaseType,
}

enum Predicate {
    /// A string type that is promoted to long text.
    LongText,
    /// Membership in the category's type family.
    Family,
}

struct Rule {
    category: TypeCategory,
    predicate: Predicate,
}

impl Rule {
    const fn family(category: TypeCategory) -> Self {
        Self {
            category,
            predicate: Predicate::Family,
        }
    }

    fn matches(&self, column: &ColumnDescriptor, ctx: &RuleContext<'_>) -> bool {
        match self.predicate {
            Predicate::LongText => {
                STRING_TYPES.contains(&column.source_type)
                    && (ctx.config.prefers_long_text(ctx.dialect)
                        || ctx.config.is_long_text_name(&column.name))
            }
            Predicate::Family => self.category.family().contains(&column.source_type),
        }
    }
}

/// Ordered rule chain. Position is priority.
static RULES: [Rule; 11] = [
    Rule {
        category: TypeCategory::Text,
        predicate: Predicate::LongText,
    },
    Rule::family(TypeCategory::String),
    Rule::family(TypeCategory::Char),
    Rule::family(TypeCategory::DateTime),
    Rule::family(TypeCategory::Date),
    Rule::family(TypeCategory::Time),
    Rule::family(TypeCategory::Int),
    Rule::family(TypeCategory::Double),
    Rule::family(TypeCategory::Decimal),
    Rule::family(TypeCategory::Long),
    Rule::family(TypeCategory::Boolean),
];

/// Classify a column, or `None` when no rule matches.
pub fn try_classify(
    column: &ColumnDescriptor,
    dialect: DatabaseType,
    config: &GeneratorConfig,
) -> Option<TypeCategory> {
    let ctx = RuleContext { config, dialect };
    RULES
        .iter()
        .find(|rule| rule.matches(column, &ctx))
        .map(|rule| rule.category)
}

/// Classify a column. Unknown types fall back to [`TypeCategory::FALLBACK`].
pub fn classify(
    column: &ColumnDescriptor,
    dialect: DatabaseType,
    config: &GeneratorConfig,
) -> TypeCategory {
    try_classify(column, dialect, config).unwrap_or_else(|| {
        warn!(
            "Unmappable type '{}' for column '{}', falling back to {}",
            column.source_type,
            column.name,
            TypeCategory::FALLBACK
        );
        TypeCategory::FALLBACK
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_type(name: &str, source_type: &str) -> TypeCategory {
        classify(
            &ColumnDescriptor::new(name, source_type),
            DatabaseType::Mysql,
            &GeneratorConfig::default(),
        )
    }

    #[test]
    fn test_string_types() {
        assert_eq!(classify_type("username", "java.lang.String"), TypeCategory::String);
        assert_eq!(classify_type("username", "String"), TypeCategory::String);
        assert_eq!(classify_type("username", "kotlin.String"), TypeCategory::String);
    }

    #[test]
    fn test_text_by_field_name() {
        assert_eq!(classify_type("avatarUrl", "String"), TypeCategory::Text);
        assert_eq!(classify_type("image_base64", "String"), TypeCategory::Text);
        assert_eq!(classify_type("FILE_PATH", "java.lang.String"), TypeCategory::Text);
        assert_eq!(classify_type("introduction", "String"), TypeCategory::Text);
    }

    #[test]
    fn test_text_keyword_requires_string_type() {
        assert_eq!(classify_type("text_count", "Integer"), TypeCategory::Int);
    }

    #[test]
    fn test_text_by_dialect_preference() {
        let config = GeneratorConfig {
            long_text_dialects: vec![DatabaseType::Postgresql],
            ..GeneratorConfig::default()
        };
        let column = ColumnDescriptor::new("username", "String");
        assert_eq!(
            classify(&column, DatabaseType::Postgresql, &config),
            TypeCategory::Text
        );
        assert_eq!(
            classify(&column, DatabaseType::Mysql, &config),
            TypeCategory::String
        );
    }

    #[test]
    fn test_temporal_types() {
        assert_eq!(classify_type("a", "java.time.LocalDateTime"), TypeCategory::DateTime);
        assert_eq!(classify_type("a", "java.util.Date"), TypeCategory::DateTime);
        assert_eq!(classify_type("a", "Date"), TypeCategory::DateTime);
        assert_eq!(classify_type("a", "java.sql.Date"), TypeCategory::Date);
        assert_eq!(classify_type("a", "LocalDate"), TypeCategory::Date);
        assert_eq!(classify_type("a", "java.time.LocalTime"), TypeCategory::Time);
        assert_eq!(classify_type("a", "java.sql.Time"), TypeCategory::Time);
    }

    #[test]
    fn test_numeric_types() {
        assert_eq!(classify_type("a", "int"), TypeCategory::Int);
        assert_eq!(classify_type("a", "java.lang.Integer"), TypeCategory::Int);
        assert_eq!(classify_type("a", "kotlin.Int"), TypeCategory::Int);
        assert_eq!(classify_type("a", "Double"), TypeCategory::Double);
        assert_eq!(classify_type("a", "float"), TypeCategory::Double);
        assert_eq!(classify_type("a", "java.math.BigDecimal"), TypeCategory::Decimal);
        assert_eq!(classify_type("a", "java.lang.Long"), TypeCategory::Long);
        assert_eq!(classify_type("a", "long"), TypeCategory::Long);
    }

    #[test]
    fn test_char_and_boolean() {
        assert_eq!(classify_type("a", "char"), TypeCategory::Char);
        assert_eq!(classify_type("a", "java.lang.Character"), TypeCategory::Char);
        assert_eq!(classify_type("a", "Boolean"), TypeCategory::Boolean);
        assert_eq!(classify_type("a", "kotlin.Boolean"), TypeCategory::Boolean);
    }

    #[test]
    fn test_unknown_falls_back_to_string() {
        assert_eq!(classify_type("a", "com.example.Money"), TypeCategory::String);
        assert_eq!(classify_type("a", "Widget"), TypeCategory::String);
        assert!(try_classify(
            &ColumnDescriptor::new("a", "Widget"),
            DatabaseType::Mysql,
            &GeneratorConfig::default()
        )
        .is_none());
    }

    #[test]
    fn test_qualified_name_not_matched_by_simple_list() {
        // A user type named String in another package is not java.lang.String.
        assert!(!STRING_TYPES.contains("com.example.String"));
        assert!(STRING_TYPES.contains("String"));
    }

    #[test]
    fn test_every_category_is_reachable() {
        let config = GeneratorConfig::default();
        for category in TypeCategory::ALL {
            let source = category.family().simple[0];
            let name = if category == TypeCategory::Text { "content_text" } else { "value" };
            let column = ColumnDescriptor::new(name, source);
            assert_eq!(classify(&column, DatabaseType::H2, &config), category);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(TypeCategory::DateTime.to_string(), "DATETIME");
        assert_eq!(TypeCategory::Boolean.to_string(), "BOOLEAN");
    }
}
