use mmml::encoding::EventToExpression;
use mmml::error::MmmlError;
use mmml::language::*;
use mmml::registry::EncoderRegistry;

fn note(duration: &str, pitches: &str, volume: Option<Volume>) -> Event {
    Event::Note(Note::new(
        Fraction::parse(duration).unwrap(),
        parse_pitch_list(pitches).unwrap(),
        volume,
    ))
}

fn rest(duration: &str) -> Event {
    Event::Rest(Rest {
        duration: Fraction::parse(duration).unwrap(),
    })
}

fn seq(tag: Option<&str>, children: Vec<Event>) -> Event {
    Event::Sequence(Container {
        tag: tag.map(str::to_string),
        children,
    })
}

fn sim(tag: Option<&str>, children: Vec<Event>) -> Event {
    Event::Simultaneous(Container {
        tag: tag.map(str::to_string),
        children,
    })
}

#[test]
fn rests() {
    let converter = EventToExpression::new();

    assert_eq!(converter.convert(&rest("1")), Ok("r 1".to_string()));
    assert_eq!(converter.convert(&rest("5/4")), Ok("r 5/4".to_string()));
}

#[test]
fn notes() {
    let converter = EventToExpression::new();

    assert_eq!(
        converter.convert(&note("1/4", "c", Some(Volume::Ff))),
        Ok("n 1/4 c4 ff".to_string())
    );

    // absent values render as the ignore token so re-decoding is lossless
    assert_eq!(
        converter.convert(&note("1/4", "c", None)),
        Ok("n 1/4 c4 _".to_string())
    );
    assert_eq!(
        converter.convert(&note("1", "", None)),
        Ok("n 1 _ _".to_string())
    );
}

#[test]
fn chords() {
    let converter = EventToExpression::new();

    assert_eq!(
        converter.convert(&note("1", "c4,ds3", None)),
        Ok("n 1 c4,ds3 _".to_string())
    );
}

#[test]
fn unit_ratio_keeps_its_slash() {
    let converter = EventToExpression::new();

    // "1" would re-decode as something other than a 1/1 ratio
    assert_eq!(
        converter.convert(&note("1/4", "1/1", Some(Volume::Ff))),
        Ok("n 1/4 1/1 ff".to_string())
    );
}

#[test]
fn empty_containers() {
    let converter = EventToExpression::new();

    assert_eq!(converter.convert(&seq(None, vec![])), Ok("seq _\n".to_string()));
    assert_eq!(
        converter.convert(&seq(Some("abc"), vec![])),
        Ok("seq abc\n".to_string())
    );
    assert_eq!(converter.convert(&sim(None, vec![])), Ok("sim _\n".to_string()));
}

#[test]
fn containers_with_children() {
    let converter = EventToExpression::new();

    assert_eq!(
        converter.convert(&seq(None, vec![rest("1"), rest("1")])),
        Ok("seq _\n\n    r 1\n    r 1\n".to_string())
    );
    assert_eq!(
        converter.convert(&sim(None, vec![rest("1"), rest("1")])),
        Ok("sim _\n\n    r 1\n    r 1\n".to_string())
    );
}

#[test]
fn nested_containers() {
    let converter = EventToExpression::new();

    assert_eq!(
        converter.convert(&seq(None, vec![rest("1"), seq(None, vec![rest("1")])])),
        Ok("seq _\n\n    r 1\n    seq _\n\n        r 1\n\n".to_string())
    );
}

#[test]
fn grace_notes() {
    let converter = EventToExpression::new();

    let mut ornamented = Note::new(
        Fraction::new(1, 4),
        parse_pitch_list("d4").unwrap(),
        Some(Volume::P),
    );
    ornamented
        .grace_notes
        .push(note("1/4", "c4", Some(Volume::P)));

    assert_eq!(
        converter.convert(&Event::Note(ornamented)),
        Ok("n 1/4 d4 p\n\n    n 1/4 c4 p\n".to_string())
    );
}

#[test]
fn unregistered_kinds_are_an_error() {
    let converter = EventToExpression::with_registry(EncoderRegistry::new());

    assert_eq!(
        converter.convert(&rest("1")),
        Err(MmmlError::UnknownEncoder("rest"))
    );
}

#[test]
fn custom_encoder_registration() {
    let mut converter = EventToExpression::new();

    // overriding a builtin is allowed
    converter.register(&[EventKind::Rest], |event: &Event, _: &EncoderRegistry| match event {
        Event::Rest(rest) => Ok(format!("pause {}", rest.duration)),
        other => Err(MmmlError::UnknownEncoder(
            other
                .kind()
                .name(),
        )),
    });

    assert_eq!(converter.convert(&rest("3/2")), Ok("pause 3/2".to_string()));
    // other kinds still use the builtin encoders
    assert_eq!(
        converter.convert(&note("1", "c", None)),
        Ok("n 1 c4 _".to_string())
    );
}
