//! Arabic text normalization
//!
//! Collapses the spelling variation found in informal farmer messages —
//! diacritics, elongation, hamza carriers, Arabizi digit transliteration —
//! into one canonical form. `normalize` is pure, total and idempotent;
//! gazetteer synonyms, keyword banks and incoming text all pass through
//! the same function, so lookups compare like with like.

/// Arabizi digit substitutes for Arabic letters (2=ء 3=ع 4=غ 5=خ 6=ط 7=ح 8=ق 9=ص)
fn arabizi_letter(d: char) -> Option<char> {
    match d {
        '2' => Some('ء'),
        '3' => Some('ع'),
        '4' => Some('غ'),
        '5' => Some('خ'),
        '6' => Some('ط'),
        '7' => Some('ح'),
        '8' => Some('ق'),
        '9' => Some('ص'),
        _ => None,
    }
}

/// Arabic-Indic and extended Arabic-Indic numerals → ASCII digits
fn fold_digit(c: char) -> char {
    match c {
        '٠'..='٩' => char::from(b'0' + (c as u32 - '٠' as u32) as u8),
        '۰'..='۹' => char::from(b'0' + (c as u32 - '۰' as u32) as u8),
        _ => c,
    }
}

fn is_diacritic(c: char) -> bool {
    matches!(c,
        '\u{0610}'..='\u{061A}'
        | '\u{064B}'..='\u{065F}'
        | '\u{0670}'
        | '\u{06D6}'..='\u{06ED}')
}

const TATWEEL: char = '\u{0640}';

fn unify_letter(c: char) -> char {
    match c {
        'إ' | 'أ' | 'آ' => 'ا',
        'ى' => 'ي',
        'ؤ' => 'و',
        'ئ' => 'ي',
        'ة' => 'ه',
        _ => c,
    }
}

fn is_arabic(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

/// Map Arabizi digits to letters, but only where the digit touches an
/// alphabetic character. A digit inside a word is transliteration
/// ("3ليكم", "شهر3"); a free-standing number ("5 لتر") is a quantity or
/// month and must survive for the pattern extractors.
fn map_arabizi(chars: &[char]) -> Vec<char> {
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let adjacent_letter = (i > 0 && chars[i - 1].is_alphabetic())
                || (i + 1 < chars.len() && chars[i + 1].is_alphabetic());
            match arabizi_letter(c) {
                Some(letter) if adjacent_letter => letter,
                _ => c,
            }
        })
        .collect()
}

/// Collapse runs of 3+ identical letters to one (سلاااام → سلام).
/// Double letters and digit runs are left alone.
fn deelongate(chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let mut j = i + 1;
        while j < chars.len() && chars[j] == c {
            j += 1;
        }
        let run = j - i;
        if c.is_alphabetic() && run >= 3 {
            out.push(c);
        } else {
            out.extend(std::iter::repeat(c).take(run));
        }
        i = j;
    }
    out
}

/// Normalize raw text into canonical Arabic form.
///
/// Pipeline: case-fold, digit folding, Arabizi mapping, diacritic and
/// tatweel removal, letter-variant unification, charset filtering (keep
/// Arabic, ASCII digits, whitespace), de-elongation, whitespace collapse.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let chars: Vec<char> = lowered.chars().map(fold_digit).collect();
    let chars = map_arabizi(&chars);

    let cleaned: Vec<char> = chars
        .into_iter()
        .filter(|&c| !is_diacritic(c) && c != TATWEEL)
        .map(unify_letter)
        .collect();

    // Keep Arabic letters, ASCII digits and whitespace. Arabic punctuation
    // (؟ ، ؛) sits inside the Arabic block but is not alphabetic, so it is
    // dropped here too. A decimal point survives only between two digits.
    let filtered: Vec<char> = cleaned
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let keep = (is_arabic(c) && c.is_alphabetic())
                || c.is_ascii_digit()
                || c.is_whitespace()
                || (c == '.'
                    && i > 0
                    && cleaned[i - 1].is_ascii_digit()
                    && i + 1 < cleaned.len()
                    && cleaned[i + 1].is_ascii_digit());
            if keep {
                c
            } else {
                ' '
            }
        })
        .collect();

    let deelongated = deelongate(&filtered);

    // Collapse whitespace runs and trim in one pass.
    let mut out = String::with_capacity(deelongated.len());
    for c in deelongated {
        if c.is_whitespace() {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
        } else {
            out.push(c);
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}
