//! Inflection attributes from the `Übersicht` (overview) templates.
//!
//! Multi-definition entries number their attributes (`Genus 1=`,
//! `Nominativ Plural 1=`); the first occurrence wins either way.

use once_cell::sync::Lazy;
use regex::Regex;
use wortkarte_core::types::Gender;

static GENUS: Lazy<Regex> = Lazy::new(|| Regex::new(r"Genus(?: \d)?=([fmn])").unwrap());

static PLURAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"Nominativ Plural(?: 1)?=(\w+)").unwrap());

static GENITIVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Genitiv Singular(?: 1)?=(\w+)").unwrap());

static HELP_VERB: Lazy<Regex> = Lazy::new(|| Regex::new(r"Hilfsverb=(\w+)").unwrap());

static PRATERITUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"Präteritum_ich=([\w ]+)").unwrap());

static PARTIZIP2: Lazy<Regex> = Lazy::new(|| Regex::new(r"Partizip II=([\w ]+)").unwrap());

fn first_capture(re: &Regex, wikitext: &str) -> Option<String> {
    re.captures(wikitext)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Grammatical gender from the `Genus` attribute. Nouns only.
pub fn gender(wikitext: &str) -> Option<Gender> {
    match first_capture(&GENUS, wikitext)?.as_str() {
        "m" => Some(Gender::Male),
        "f" => Some(Gender::Female),
        "n" => Some(Gender::Neutral),
        _ => None,
    }
}

pub fn plural(wikitext: &str) -> Option<String> {
    first_capture(&PLURAL, wikitext)
}

pub fn genitive(wikitext: &str) -> Option<String> {
    first_capture(&GENITIVE, wikitext)
}

/// Auxiliary verb (`haben`/`sein`) of a verb entry.
pub fn help_verb(wikitext: &str) -> Option<String> {
    first_capture(&HELP_VERB, wikitext)
}

pub fn prateritum(wikitext: &str) -> Option<String> {
    first_capture(&PRATERITUM, wikitext)
}

pub fn partizip2(wikitext: &str) -> Option<String> {
    first_capture(&PARTIZIP2, wikitext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_gender_letters() {
        assert_eq!(gender("|Genus=f\n"), Some(Gender::Female));
        assert_eq!(gender("|Genus=m\n"), Some(Gender::Male));
        assert_eq!(gender("|Genus=n\n"), Some(Gender::Neutral));
        assert_eq!(gender("|Genus=0\n"), None);
        assert_eq!(gender("no overview here"), None);
    }

    #[test]
    fn numbered_gender_attribute_matches() {
        // multi-gender entry like "Joghurt": first numbered form wins
        let markup = "|Genus 1=m\n|Genus 2=n\n";
        assert_eq!(gender(markup), Some(Gender::Male));
    }

    #[test]
    fn first_gender_occurrence_wins() {
        let markup = "|Genus=f\n|Genus=n\n";
        assert_eq!(gender(markup), Some(Gender::Female));
    }

    #[test]
    fn reads_noun_forms_with_and_without_suffix() {
        let markup = "|Nominativ Plural=Häuser\n|Genitiv Singular=Hauses\n";
        assert_eq!(plural(markup).as_deref(), Some("Häuser"));
        assert_eq!(genitive(markup).as_deref(), Some("Hauses"));

        let numbered = "|Nominativ Plural 1=Worte\n|Genitiv Singular 1=Wortes\n";
        assert_eq!(plural(numbered).as_deref(), Some("Worte"));
        assert_eq!(genitive(numbered).as_deref(), Some("Wortes"));
    }

    #[test]
    fn missing_forms_are_absent() {
        assert_eq!(plural("|Nominativ Singular=Milch\n"), None);
        assert_eq!(genitive(""), None);
    }

    #[test]
    fn reads_verb_attributes() {
        let markup = "|Präsens_ich=gehe\n|Präteritum_ich=ging\n|Partizip II=gegangen\n|Hilfsverb=sein\n";
        assert_eq!(help_verb(markup).as_deref(), Some("sein"));
        assert_eq!(prateritum(markup).as_deref(), Some("ging"));
        assert_eq!(partizip2(markup).as_deref(), Some("gegangen"));
    }

    #[test]
    fn multi_word_verb_forms_are_kept_whole() {
        let markup = "|Partizip II=kennen gelernt\n";
        assert_eq!(partizip2(markup).as_deref(), Some("kennen gelernt"));
    }
}
