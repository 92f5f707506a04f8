use wortkarte_core::types::{Gender, SpeechPart};

use crate::extract_entry;

/// Trimmed-down copy of a real noun entry.
const HAUS: &str = "\
== Haus ({{Sprache|Deutsch}}) ==
=== {{Wortart|Substantiv|Deutsch}}, {{n}} ===

{{Deutsch Substantiv Übersicht
|Genus=n
|Nominativ Singular=Haus
|Nominativ Plural=Häuser
|Genitiv Singular=Hauses
|Genitiv Plural=Häuser
|Dativ Singular=Haus
|Dativ Plural=Häusern
|Akkusativ Singular=Haus
|Akkusativ Plural=Häuser
}}

{{Aussprache}}
:{{IPA}} {{Lautschrift|haʊ̯s}}
:{{Hörbeispiele}} {{Audio|De-Haus.ogg}}

{{Bedeutungen}}
:[1] Gebäude, das Menschen als Unterkunft dient

{{Beispiele}}
:[1] Das ''Haus'' meiner Eltern steht am Stadtrand.
:[2] „Wir haben ein neues Haus gebaut.“<ref>Immobilienzeitung 2019</ref>

{{Redewendungen}}
:[1] Haus und Hof
";

const GEHEN: &str = "\
== gehen ({{Sprache|Deutsch}}) ==
=== {{Wortart|Verb|Deutsch}} ===

{{Deutsch Verb Übersicht
|Präsens_ich=gehe
|Präsens_du=gehst
|Präteritum_ich=ging
|Partizip II=gegangen
|Konjunktiv II_ich=ginge
|Hilfsverb=sein
}}

{{Aussprache}}
:{{IPA}} {{Lautschrift|ˈɡeːən}}
:{{Hörbeispiele}} {{Audio|De-gehen.ogg}}

{{Bedeutungen}}
:[1] sich schreitend fortbewegen
";

const ELTERN: &str = "\
== Eltern ({{Sprache|Deutsch}}) ==
=== {{Wortart|Substantiv|Deutsch}}, {{kSg.}} ===

{{Deutsch Substantiv Übersicht
|Genus=0
|Nominativ Plural=Eltern
|Genitiv Plural=Eltern
|Dativ Plural=Eltern
|Akkusativ Plural=Eltern
}}

{{Bedeutungen}}
:[1] Vater und Mutter
";

#[test]
fn noun_entry_extracts_all_noun_fields() {
    let entry = extract_entry("Haus", HAUS);

    assert_eq!(entry.speech_part, Some(SpeechPart::Noun));
    assert_eq!(entry.gender, Some(Gender::Neutral));
    assert_eq!(entry.plural.as_deref(), Some("Häuser"));
    assert_eq!(entry.genitive.as_deref(), Some("Hauses"));
    assert_eq!(entry.ipa.as_deref(), Some("haʊ̯s"));
    assert_eq!(
        entry.examples,
        vec![
            "Das <b>Haus</b> meiner Eltern steht am Stadtrand.",
            "Wir haben ein neues Haus gebaut.",
        ]
    );

    // verb attributes stay empty on a noun
    assert_eq!(entry.help_verb, None);
    assert_eq!(entry.prateritum, None);
    assert_eq!(entry.partizip2, None);
}

#[test]
fn verb_entry_extracts_all_verb_fields() {
    let entry = extract_entry("gehen", GEHEN);

    assert_eq!(entry.speech_part, Some(SpeechPart::Verb));
    assert_eq!(entry.help_verb.as_deref(), Some("sein"));
    assert_eq!(entry.prateritum.as_deref(), Some("ging"));
    assert_eq!(entry.partizip2.as_deref(), Some("gegangen"));
    assert_eq!(entry.ipa.as_deref(), Some("ˈɡeːən"));

    // noun attributes stay empty on a verb
    assert_eq!(entry.gender, None);
    assert_eq!(entry.plural, None);
    assert_eq!(entry.genitive, None);
}

#[test]
fn plural_only_noun_is_classified_despite_substantiv_tag() {
    let entry = extract_entry("Eltern", ELTERN);

    assert_eq!(entry.speech_part, Some(SpeechPart::PluralOnly));
    assert_eq!(entry.plural.as_deref(), Some("Eltern"));
    // Genus=0 carries no gender letter
    assert_eq!(entry.gender, None);
}

#[test]
fn gender_is_only_set_for_nouns() {
    // Genus attribute present, but the entry is a verb; the field stays
    // absent because gender is meaningless outside nouns
    let markup = "\
=== {{Wortart|Verb|Deutsch}} ===
|Genus=f
";
    let entry = extract_entry("stricken", markup);
    assert_eq!(entry.speech_part, Some(SpeechPart::Verb));
    assert_eq!(entry.gender, None);

    for fixture in [HAUS, GEHEN, ELTERN] {
        let entry = extract_entry("x", fixture);
        if entry.gender.is_some() {
            assert!(entry.is_noun());
        }
    }
}

#[test]
fn blob_without_any_template_yields_an_empty_entry() {
    let entry = extract_entry("Wort", "plain prose with no markup at all");

    assert_eq!(entry.speech_part, None);
    assert_eq!(entry.gender, None);
    assert_eq!(entry.plural, None);
    assert_eq!(entry.genitive, None);
    assert_eq!(entry.ipa, None);
    assert_eq!(entry.audio_url, None);
    assert!(entry.examples.is_empty());
}
