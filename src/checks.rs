pub mod numeric;
pub mod uniq;

/// Builder signature for a check: column only, or column plus bounds.
pub enum Template {
    Simple(fn(&str) -> String),
    Ranged(fn(&str, &str, &str) -> String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    IsNotNull,
    ValuesAreUnique,
    UniqueValueCountIsBetween,
    MaxIsBetween,
    MinIsBetween,
    SumIsBetween,
    MeanIsBetween,
    ValuesAreBetween,
}

impl Check {
    pub const ALL: [Check; 8] = [
        Check::IsNotNull,
        Check::ValuesAreUnique,
        Check::UniqueValueCountIsBetween,
        Check::MaxIsBetween,
        Check::MinIsBetween,
        Check::SumIsBetween,
        Check::MeanIsBetween,
        Check::ValuesAreBetween,
    ];

    /// Resolves a user-supplied check name, case-insensitively.
    pub fn parse(name: &str) -> Option<Check> {
        let name = name.to_lowercase();
        Check::ALL.iter().copied().find(|check| check.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Check::IsNotNull => "is_not_null",
            Check::ValuesAreUnique => "column_values_are_unique",
            Check::UniqueValueCountIsBetween => "column_unique_value_count_is_between",
            Check::MaxIsBetween => "column_max_is_between",
            Check::MinIsBetween => "column_min_is_between",
            Check::SumIsBetween => "column_sum_is_between",
            Check::MeanIsBetween => "column_mean_is_between",
            Check::ValuesAreBetween => "column_values_are_between",
        }
    }

    pub fn column_prompt(self) -> &'static str {
        match self {
            Check::IsNotNull => "Please enter the column name to check for NOT NULL",
            Check::ValuesAreUnique | Check::UniqueValueCountIsBetween => {
                "Please enter the column name to check for uniqueness"
            }
            Check::MaxIsBetween
            | Check::MinIsBetween
            | Check::SumIsBetween
            | Check::MeanIsBetween
            | Check::ValuesAreBetween => "Please enter the column name to check",
        }
    }

    /// Short phrase used in the confirmation echoed after prompting.
    pub fn summary(self) -> &'static str {
        match self {
            Check::IsNotNull => "is not null",
            Check::ValuesAreUnique => "values are unique",
            Check::UniqueValueCountIsBetween => "unique value count is between",
            Check::MaxIsBetween => "MAX value is between",
            Check::MinIsBetween => "MIN value is between",
            Check::SumIsBetween => "SUM is between",
            Check::MeanIsBetween => "mean is between",
            Check::ValuesAreBetween => "values are between",
        }
    }

    pub fn template(self) -> Template {
        match self {
            Check::IsNotNull => Template::Simple(is_not_null),
            Check::ValuesAreUnique => Template::Simple(uniq::column_values_are_unique),
            Check::UniqueValueCountIsBetween => {
                Template::Ranged(uniq::column_unique_value_count_is_between)
            }
            Check::MaxIsBetween => Template::Ranged(numeric::column_max_is_between),
            Check::MinIsBetween => Template::Ranged(numeric::column_min_is_between),
            Check::SumIsBetween => Template::Ranged(numeric::column_sum_is_between),
            Check::MeanIsBetween => Template::Ranged(numeric::column_mean_is_between),
            Check::ValuesAreBetween => Template::Ranged(numeric::column_values_are_between),
        }
    }

    pub fn needs_bounds(self) -> bool {
        matches!(self.template(), Template::Ranged(_))
    }
}

/// Counts rows where the column is null. The table reference is a
/// placeholder; this tool never knows the real table name.
pub fn is_not_null(column: &str) -> String {
    format!("SELECT COUNT(*)\nFROM ...\nWHERE {column} IS NULL;\n")
}

#[cfg(test)]
mod tests {
    use sqlparser::dialect::PostgreSqlDialect;
    use sqlparser::parser::Parser;

    use crate::checks::{Check, Template, is_not_null};

    const COLUMNS: &[&str] = &["age", "user_id", "amount"];
    const LOWER: &str = "10";
    const UPPER: &str = "250";

    fn build(check: Check, column: &str) -> String {
        match check.template() {
            Template::Simple(build) => build(column),
            Template::Ranged(build) => build(column, LOWER, UPPER),
        }
    }

    #[test]
    fn parse_resolves_every_canonical_name() {
        for check in Check::ALL {
            assert_eq!(Check::parse(check.name()), Some(check));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Check::parse("IS_NOT_NULL"), Some(Check::IsNotNull));
        assert_eq!(
            Check::parse("Column_Max_Is_Between"),
            Some(Check::MaxIsBetween)
        );
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(Check::parse("column_is_fancy"), None);
        assert_eq!(Check::parse(""), None);
    }

    #[test]
    fn not_null_template_is_exact() {
        assert_eq!(
            is_not_null("age"),
            "SELECT COUNT(*)\nFROM ...\nWHERE age IS NULL;\n"
        );
    }

    #[test]
    fn ranged_checks_require_bounds() {
        for check in Check::ALL {
            let ranged = check != Check::IsNotNull && check != Check::ValuesAreUnique;
            assert_eq!(check.needs_bounds(), ranged, "{}", check.name());
        }
    }

    #[test]
    fn every_template_parses_once_the_table_is_filled_in() {
        for check in Check::ALL {
            for &column in COLUMNS {
                let sql = build(check, column).replace("FROM ...", "FROM some_table");
                let statements = Parser::parse_sql(&PostgreSqlDialect {}, &sql)
                    .unwrap_or_else(|err| panic!("{}: {err}\n{sql}", check.name()));
                assert_eq!(statements.len(), 1, "{}", check.name());
            }
        }
    }

    #[test]
    fn ranged_templates_carry_both_bounds() {
        for check in Check::ALL {
            if !check.needs_bounds() {
                continue;
            }
            let sql = build(check, "amount");
            assert!(sql.contains(LOWER), "{}", check.name());
            assert!(sql.contains(UPPER), "{}", check.name());
        }
    }
}
