/// How a queried class name is compared against a caller-supplied value.
///
/// Both modes work on UTF-16 code units as reported by the OS. Neither
/// consults locale data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// Code unit for code unit.
    #[default]
    Ordinal,
    /// Simple uppercase mapping applied to both sides before comparing.
    OrdinalIgnoreCase,
}

impl Comparison {
    /// Returns `true` if `name` and `value` are the same string under this comparison.
    pub fn equals(self, name: &[u16], value: &str) -> bool {
        match self {
            Comparison::Ordinal => name.iter().copied().eq(value.encode_utf16()),
            Comparison::OrdinalIgnoreCase => {
                fold_units(name).eq(value.chars().map(|c| Folded::Char(simple_uppercase(c))))
            }
        }
    }

    /// Returns `true` if `value` occurs anywhere within `name`.
    ///
    /// An empty `value` is contained in every name.
    pub fn contains(self, name: &[u16], value: &str) -> bool {
        let width = value.encode_utf16().count();
        if width == 0 {
            return true;
        }
        if width > name.len() {
            return false;
        }
        name.windows(width).any(|window| self.equals(window, value))
    }
}

#[derive(PartialEq, Eq)]
enum Folded {
    Char(char),
    Surrogate(u16),
}

fn fold_units(units: &[u16]) -> impl Iterator<Item = Folded> + '_ {
    char::decode_utf16(units.iter().copied()).map(|decoded| match decoded {
        Ok(c) => Folded::Char(simple_uppercase(c)),
        Err(e) => Folded::Surrogate(e.unpaired_surrogate()),
    })
}

// Characters whose uppercase form expands to several characters are left alone.
fn simple_uppercase(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
