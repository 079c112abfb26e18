use crate::error::{BuildError, Resource};

/// Symbol appended by augmentation; its position marks accepting states.
pub const END_MARKER: char = '#';

pub(crate) const META_CHARS: [char; 4] = [
    '|', // union
    '*', // star
    '(', ')', // group brackets
];

/// A sorted, duplicate-free set of input symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    pub fn new<I: IntoIterator<Item = char>>(symbols: I) -> Self {
        let mut symbols: Vec<char> = symbols.into_iter().collect();
        symbols.sort_unstable();
        symbols.dedup();
        Alphabet { symbols }
    }

    /// The distinct symbols of `pattern`, skipping metacharacters and the
    /// end marker.
    pub fn of_pattern(pattern: &str) -> Self {
        pattern
            .chars()
            .filter(|c| *c != END_MARKER && !META_CHARS.contains(c))
            .collect()
    }

    /// `a` to `z`.
    pub fn lowercase() -> Self {
        Alphabet::new('a'..='z')
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.index_of(symbol).is_some()
    }

    /// Rank of `symbol` in ascending order, used as the transition column.
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.symbols.binary_search(&symbol).ok()
    }

    pub fn symbol(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    fn validate(&self) -> Result<(), BuildError> {
        match self
            .symbols
            .iter()
            .find(|c| **c == END_MARKER || META_CHARS.contains(c))
        {
            Some(c) => Err(BuildError::InvalidAlphabet(*c)),
            None => Ok(()),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::lowercase()
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Alphabet::new(iter)
    }
}

impl From<&str> for Alphabet {
    fn from(symbols: &str) -> Self {
        Alphabet::new(symbols.chars())
    }
}

/// Alphabet and capacities of an automaton build.
///
/// The defaults reproduce the fixed tables of the classic lowercase-only
/// construction: 26 symbols, 199 positions and 100 states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub alphabet: Alphabet,
    /// Leaves of the augmented tree, end marker included.
    pub max_positions: usize,
    pub max_states: usize,
    pub max_symbols: usize,
    pub max_depth: usize,
}

impl Config {
    pub fn new() -> Self {
        Config::default()
    }

    /// Default capacities with the symbols of `pattern` as the alphabet.
    pub fn for_pattern(pattern: &str) -> Self {
        Config::default().alphabet(Alphabet::of_pattern(pattern))
    }

    pub fn alphabet(mut self, alphabet: impl Into<Alphabet>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    pub fn max_positions(mut self, limit: usize) -> Self {
        self.max_positions = limit;
        self
    }

    pub fn max_states(mut self, limit: usize) -> Self {
        self.max_states = limit;
        self
    }

    pub fn max_symbols(mut self, limit: usize) -> Self {
        self.max_symbols = limit;
        self
    }

    pub fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = limit;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        self.alphabet.validate()?;
        if self.alphabet.len() > self.max_symbols {
            return Err(BuildError::exhausted(Resource::Symbols, self.max_symbols));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            alphabet: Alphabet::lowercase(),
            max_positions: 199,
            max_states: 100,
            max_symbols: 26,
            max_depth: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_is_sorted_and_unique() {
        let alphabet = Alphabet::from("cabba");

        assert_eq!(alphabet.iter().collect::<String>(), "abc");
        assert_eq!(alphabet.index_of('c'), Some(2));
        assert_eq!(alphabet.index_of('d'), None);
        assert_eq!(alphabet.symbol(1), Some('b'));
    }

    #[test]
    fn reserved_symbols_are_rejected() {
        for c in ['#', '|', '*', '(', ')'] {
            let config = Config::new().alphabet(Alphabet::new(['a', c]));
            assert_eq!(config.validate(), Err(BuildError::InvalidAlphabet(c)));
        }
    }

    #[test]
    fn alphabet_capacity() {
        let config = Config::new().alphabet("abc").max_symbols(2);
        assert_eq!(
            config.validate(),
            Err(BuildError::ResourceExhaustion {
                resource: Resource::Symbols,
                limit: 2
            })
        );

        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn alphabet_of_pattern() {
        let alphabet = Alphabet::of_pattern("(b|a)*a#x");
        assert_eq!(alphabet.iter().collect::<String>(), "abx");

        let config = Config::for_pattern("(A|z)*9");
        assert_eq!(config.alphabet.iter().collect::<String>(), "9Az");
        assert_eq!(config.max_positions, Config::default().max_positions);

        let wide: String = ('a'..='z').chain('A'..='C').collect();
        assert_eq!(
            Config::for_pattern(&wide).validate(),
            Err(BuildError::ResourceExhaustion {
                resource: Resource::Symbols,
                limit: 26
            })
        );
    }
}
