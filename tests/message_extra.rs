use dotrules::error::ErrorRecord;
use dotrules::message::{Template, Token, prettify};
use std::collections::BTreeMap;

fn record(attribute: &str, replacements: &[(&str, &str)]) -> ErrorRecord {
    ErrorRecord {
        attribute: attribute.to_string(),
        rule: "test".to_string(),
        replacements: replacements
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

#[test]
fn prettify_drops_wildcards_and_underscores() {
    assert_eq!(prettify("user.*.first_name"), "User first name");
    assert_eq!(prettify("user.0.name"), "User 0 name");
    assert_eq!(prettify("passwordConfirm"), "PasswordConfirm");
    assert_eq!(prettify("*"), "");
    assert_eq!(prettify("élan"), "Élan");
}

#[test]
fn template_tokenizes_every_sigil() {
    let template = Template::parse(":attribute !is|are at least %min");
    assert_eq!(
        template.tokens(),
        &[
            Token::Prettify("attribute".to_string()),
            Token::Text(" ".to_string()),
            Token::PluralSelect { singular: "is".to_string(), plural: "are".to_string() },
            Token::Text(" at least ".to_string()),
            Token::Verbatim("min".to_string()),
        ]
    );
}

#[test]
fn lone_sigils_are_text() {
    let template = Template::parse("ratio: 50% done!");
    assert_eq!(template.tokens(), &[Token::Text("ratio: 50% done!".to_string())]);
}

#[test]
fn plural_follows_a_trailing_wildcard() {
    let template = Template::parse(":attribute !is|are required");
    assert_eq!(template.render(&record("roles.*", &[])), "Roles are required");
    assert_eq!(template.render(&record("roles", &[])), "Roles is required");
    assert_eq!(template.render(&record("roles.*.name", &[])), "Roles name is required");
}

#[test]
fn prettified_and_verbatim_replacements() {
    let template = Template::parse(":attribute must equal :field (%field)");
    let rendered = template.render(&record("user.0.confirm", &[("field", "user.0.pass_word")]));
    assert_eq!(rendered, "User 0 confirm must equal User 0 pass word (user.0.pass_word)");
}

#[test]
fn explicit_attribute_replacement_wins() {
    let template = Template::parse(":attribute is invalid");
    let rendered = template.render(&record("user.0.name", &[("attribute", "full_name")]));
    assert_eq!(rendered, "Full name is invalid");
}

#[test]
fn plural_forms_may_contain_apostrophes() {
    let template = Template::parse(":attribute !isn't|aren't allowed");
    assert_eq!(template.render(&record("tags.*", &[])), "Tags aren't allowed");
}
