use std::fmt;
use std::fmt::{Debug, Display, Formatter};

/// A closed, case-insensitive set of category names
///
/// # Examples
/// ```rust
/// use budgetbuddy::models::{Category, ExpenseCategory, SavingCategory};
///
/// assert_eq!(ExpenseCategory::lookup("housing"), Some(ExpenseCategory::Housing));
/// assert_eq!(SavingCategory::lookup("SALARY"), Some(SavingCategory::Salary));
/// assert_eq!(ExpenseCategory::lookup("Salary"), None);
/// assert_eq!(SavingCategory::names(), "Salary, Investments, Gifts, Others");
/// ```
pub trait Category: Sized + Copy + Eq + Debug + Display + 'static {
    fn all() -> &'static [Self];
    fn name(&self) -> &'static str;

    fn lookup(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(text))
    }

    /// Comma separated names, in declaration order
    fn names() -> String {
        Self::all()
            .iter()
            .map(|c| c.name())
            .collect::<Vec<&str>>()
            .join(", ")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExpenseCategory {
    Housing,
    Groceries,
    Utility,
    Transport,
    Entertainment,
    Others,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SavingCategory {
    Salary,
    Investments,
    Gifts,
    Others,
}

impl Category for ExpenseCategory {
    fn all() -> &'static [Self] {
        &[
            ExpenseCategory::Housing,
            ExpenseCategory::Groceries,
            ExpenseCategory::Utility,
            ExpenseCategory::Transport,
            ExpenseCategory::Entertainment,
            ExpenseCategory::Others,
        ]
    }
    fn name(&self) -> &'static str {
        match self {
            ExpenseCategory::Housing => "Housing",
            ExpenseCategory::Groceries => "Groceries",
            ExpenseCategory::Utility => "Utility",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Others => "Others",
        }
    }
}

impl Category for SavingCategory {
    fn all() -> &'static [Self] {
        &[
            SavingCategory::Salary,
            SavingCategory::Investments,
            SavingCategory::Gifts,
            SavingCategory::Others,
        ]
    }
    fn name(&self) -> &'static str {
        match self {
            SavingCategory::Salary => "Salary",
            SavingCategory::Investments => "Investments",
            SavingCategory::Gifts => "Gifts",
            SavingCategory::Others => "Others",
        }
    }
}

impl Display for ExpenseCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Display for SavingCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case_and_padding() {
        assert_eq!(
            ExpenseCategory::lookup(" TRANSPORT "),
            Some(ExpenseCategory::Transport)
        );
        assert_eq!(
            ExpenseCategory::lookup("entertainment"),
            Some(ExpenseCategory::Entertainment)
        );
        assert_eq!(SavingCategory::lookup("gifts"), Some(SavingCategory::Gifts));
    }

    #[test]
    fn sets_are_disjoint_except_others() {
        assert_eq!(ExpenseCategory::lookup("Investments"), None);
        assert_eq!(SavingCategory::lookup("Groceries"), None);
        assert_eq!(ExpenseCategory::lookup("others"), Some(ExpenseCategory::Others));
        assert_eq!(SavingCategory::lookup("others"), Some(SavingCategory::Others));
    }

    #[test]
    fn unknown_and_empty() {
        assert_eq!(ExpenseCategory::lookup("qweqwe"), None);
        assert_eq!(ExpenseCategory::lookup(""), None);
    }

    #[test]
    fn names_in_order() {
        assert_eq!(
            ExpenseCategory::names(),
            "Housing, Groceries, Utility, Transport, Entertainment, Others"
        );
    }
}
