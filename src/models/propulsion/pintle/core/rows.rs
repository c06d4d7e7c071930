use std::fmt;

/// Identifies one of the two oxidizer slot rows around the pintle tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotRow {
    /// The row nearest the pintle tip.
    Primary,
    /// The row upstream of the primary row.
    Secondary,
}

impl fmt::Display for SlotRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotRow::Primary => f.write_str("primary"),
            SlotRow::Secondary => f.write_str("secondary"),
        }
    }
}

/// A value held once per oxidizer slot row.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rows<T> {
    pub primary: T,
    pub secondary: T,
}

impl<T> Rows<T> {
    #[must_use]
    pub fn new(primary: T, secondary: T) -> Self {
        Self { primary, secondary }
    }

    /// Returns the value for `row`.
    #[must_use]
    pub fn get(&self, row: SlotRow) -> &T {
        match row {
            SlotRow::Primary => &self.primary,
            SlotRow::Secondary => &self.secondary,
        }
    }

    /// Applies `f` to each row, primary first.
    pub fn map<U>(self, mut f: impl FnMut(SlotRow, T) -> U) -> Rows<U> {
        Rows {
            primary: f(SlotRow::Primary, self.primary),
            secondary: f(SlotRow::Secondary, self.secondary),
        }
    }

    /// Applies a fallible `f` to each row, primary first.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E>(
        self,
        mut f: impl FnMut(SlotRow, T) -> Result<U, E>,
    ) -> Result<Rows<U>, E> {
        Ok(Rows {
            primary: f(SlotRow::Primary, self.primary)?,
            secondary: f(SlotRow::Secondary, self.secondary)?,
        })
    }

    /// Pairs each row's value with the matching value of `other`.
    pub fn zip<U>(self, other: Rows<U>) -> Rows<(T, U)> {
        Rows {
            primary: (self.primary, other.primary),
            secondary: (self.secondary, other.secondary),
        }
    }
}
