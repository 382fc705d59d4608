/// Sandhi joining — phonological merge rules at word boundaries.
///
/// Two boundary rules, checked in order, first match wins: vowel elision
/// (a long-vowel sign before a vowel-initial word) and nasal assimilation
/// (anusvara before a labial consonant). Everything else joins with a
/// single space.

/// The long-vowel sign elided before a vowel-initial word.
const LONG_VOWEL_SIGN: char = 'ా';
/// The nasal marker absorbed into a following labial.
const ANUSVARA: char = 'ం';
/// Independent vowel letters that trigger elision.
const VOWELS: &[char] = &[
    'అ', 'ఆ', 'ఇ', 'ఈ', 'ఉ', 'ఊ', 'ఋ', 'ౠ', 'ఎ', 'ఏ', 'ఐ', 'ఒ', 'ఓ', 'ఔ',
];
/// Labial consonants that absorb a preceding anusvara.
const LABIALS: &[char] = &['ప', 'బ', 'మ'];

/// Join two adjacent surface tokens, applying boundary rules.
pub fn join(left: &str, right: &str) -> String {
    if left.is_empty() {
        return right.to_string();
    }
    if right.is_empty() {
        return left.to_string();
    }

    if let Some(stripped) = left.strip_suffix(LONG_VOWEL_SIGN) {
        if right.starts_with(VOWELS) {
            return format!("{}{}", stripped, right);
        }
    }

    if left.ends_with(ANUSVARA) && right.starts_with(LABIALS) {
        return format!("{}{}", left, right);
    }

    format!("{} {}", left, right)
}

/// Fold `join` left-to-right across a token sequence.
///
/// Empty input yields an empty string; a single token passes through
/// unchanged.
pub fn join_sequence(tokens: &[&str]) -> String {
    let mut iter = tokens.iter();
    let first = match iter.next() {
        Some(token) => token.to_string(),
        None => return String::new(),
    };
    iter.fold(first, |acc, token| join(&acc, token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowel_elision_drops_sign() {
        // "చూడా" + "అది" → sign elided, no space
        assert_eq!(join("చూడా", "అది"), "చూడఅది");
    }

    #[test]
    fn no_elision_before_consonant() {
        assert_eq!(join("చూడా", "పని"), "చూడా పని");
    }

    #[test]
    fn nasal_assimilation_before_labials() {
        assert_eq!(join("పుస్తకం", "పట్టు"), "పుస్తకంపట్టు");
        assert_eq!(join("పుస్తకం", "బడి"), "పుస్తకంబడి");
        assert_eq!(join("పుస్తకం", "మంచి"), "పుస్తకంమంచి");
    }

    #[test]
    fn no_assimilation_before_other_consonants() {
        assert_eq!(join("పుస్తకం", "చదువు"), "పుస్తకం చదువు");
    }

    #[test]
    fn default_space_join() {
        assert_eq!(join("నేను", "వెళ్తాను"), "నేను వెళ్తాను");
    }

    #[test]
    fn join_with_empty_sides() {
        assert_eq!(join("", "నేను"), "నేను");
        assert_eq!(join("నేను", ""), "నేను");
    }

    #[test]
    fn sequence_empty_and_single() {
        assert_eq!(join_sequence(&[]), "");
        assert_eq!(join_sequence(&["పుస్తకం"]), "పుస్తకం");
    }

    #[test]
    fn sequence_folds_left_to_right() {
        assert_eq!(
            join_sequence(&["నేను", "పుస్తకం", "చదువుతాను."]),
            "నేను పుస్తకం చదువుతాను."
        );
        // Nasal rule fires mid-sequence
        assert_eq!(
            join_sequence(&["పుస్తకం", "పట్టు", "చదువు"]),
            "పుస్తకంపట్టు చదువు"
        );
    }
}
