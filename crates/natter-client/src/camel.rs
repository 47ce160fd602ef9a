//! Channel-name normalization.

/// Camel-case a free-form channel name.
///
/// Channel names are unique camel-cased identifiers on the backend, so user
/// input like `"General Chat"` becomes `"generalChat"` before it is sent.
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (index, word) in name.split_whitespace().enumerate() {
        let lower = word.to_lowercase();
        if index == 0 {
            out.push_str(&lower);
        } else {
            let mut chars = lower.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::to_camel_case;

    #[test]
    fn multi_word_names_are_camel_cased() {
        assert_eq!(to_camel_case("General Chat"), "generalChat");
        assert_eq!(to_camel_case("  the   water cooler "), "theWaterCooler");
    }

    #[test]
    fn single_words_are_lowercased() {
        assert_eq!(to_camel_case("General"), "general");
        assert_eq!(to_camel_case("general"), "general");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(to_camel_case(""), "");
        assert_eq!(to_camel_case("   "), "");
    }
}
