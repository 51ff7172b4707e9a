use super::*;
use crate::context::PinyinContext;
use crate::format::Unformatted;
use RomanizationSystem::*;

fn ctx() -> &'static PinyinContext {
    PinyinContext::global()
}

/// Small table where 乐 has a reading missing from the mapping rows and 女
/// has one whose Wade-Giles cell is empty.
fn partial_ctx() -> PinyinContext {
    let unicode = r#"
[characters]
4E50 = "le4,yue4,yao4"
5973 = "nü3,ru3"
"#;
    let mapping = r#"
[[row]]
hanyu = "le"
wade = "le"

[[row]]
hanyu = "yao"
wade = "yao"

[[row]]
hanyu = "nü"
yale = "nyu"

[[row]]
hanyu = "ru"
wade = "ju"
"#;
    PinyinContext::from_toml(unicode, mapping).unwrap()
}

#[test]
fn single_reading() {
    assert_eq!(ctx().resolver().resolve('李', HanyuPinyin).unwrap(), ["li3"]);
}

#[test]
fn multiple_readings_keep_table_order() {
    assert_eq!(
        ctx().resolver().resolve('偻', HanyuPinyin).unwrap(),
        ["lou2", "lü3"]
    );
    assert_eq!(
        ctx().resolver().resolve('和', HanyuPinyin).unwrap(),
        ["he2", "he4", "huo2", "huo4", "hu2"]
    );
}

#[test]
fn simplified_and_traditional_are_independent_keys() {
    let r = ctx().resolver();
    assert_eq!(r.resolve('吕', HanyuPinyin).unwrap(), ["lü3"]);
    assert_eq!(r.resolve('呂', HanyuPinyin).unwrap(), ["lü3"]);
    assert_eq!(r.resolve('蒋', HanyuPinyin).unwrap(), ["jiang3"]);
}

#[test]
fn common_characters_first_reading() {
    let r = ctx().resolver();
    let cases = [
        ('爸', "ba4"), ('波', "bo1"), ('苛', "ke1"), ('李', "li3"), ('露', "lu4"),
        ('吕', "lü3"), ('来', "lai2"), ('背', "bei4"), ('宝', "bao3"), ('抠', "kou1"),
        ('虾', "xia1"), ('携', "xie2"), ('表', "biao3"), ('球', "qiu2"), ('花', "hua1"),
        ('落', "luo4"), ('槐', "huai2"), ('徽', "hui1"), ('月', "yue4"), ('汗', "han4"),
        ('狠', "hen3"), ('邦', "bang1"), ('烹', "peng1"), ('轰', "hong1"), ('天', "tian1"),
        ('银', "yin2"), ('鹰', "ying1"), ('想', "xiang3"), ('炯', "jiong3"), ('环', "huan2"),
        ('云', "yun2"), ('黄', "huang2"), ('渊', "yuan1"), ('儿', "er2"),
        ('呂', "lü3"), ('來', "lai2"), ('寶', "bao3"), ('摳', "kou1"), ('蝦', "xia1"),
        ('攜', "xie2"), ('轟', "hong1"), ('銀', "yin2"), ('鷹', "ying1"), ('環', "huan2"),
        ('雲', "yun2"), ('黃', "huang2"), ('淵', "yuan1"), ('兒', "er2"),
    ];
    for (ch, expected) in cases {
        assert_eq!(r.first(ch, HanyuPinyin).unwrap().as_deref(), Some(expected), "{ch}");
    }
}

#[test]
fn every_bundled_reading_translates_strictly() {
    let r = ctx().resolver();
    let table = ctx().lookup_table();
    for cp in 0x3000u32..0xA000 {
        let Some(ch) = char::from_u32(cp) else { continue };
        let Some(hanyu) = table.get(ch) else { continue };
        for target in RomanizationSystem::ALL {
            let out = r.resolve(ch, target).unwrap();
            assert_eq!(out.len(), hanyu.len(), "{ch} {target}");
        }
    }
}

#[test]
fn wade_giles() {
    let r = ctx().resolver();
    assert_eq!(r.resolve('蔣', WadeGiles).unwrap(), ["chiang3"]);
    assert_eq!(r.resolve('介', WadeGiles).unwrap(), ["chieh4"]);
    assert_eq!(r.first('石', WadeGiles).unwrap().as_deref(), Some("shih2"));
    assert_eq!(r.resolve('石', WadeGiles).unwrap(), ["shih2", "tan4"]);
}

#[test]
fn translation_keeps_reading_count_and_order() {
    let r = ctx().resolver();
    let hanyu = r.resolve('行', HanyuPinyin).unwrap();
    let wade = r.resolve('行', WadeGiles).unwrap();
    assert_eq!(hanyu.len(), wade.len());
    assert_eq!(wade, ["hsing2", "hang2", "heng2", "hang4"]);
}

#[test]
fn yale_and_tongyong() {
    let r = ctx().resolver();
    assert_eq!(r.resolve('中', Yale).unwrap(), ["jung1", "jung4"]);
    assert_eq!(r.resolve('學', Tongyong).unwrap(), ["syue2"]);
}

#[test]
fn mps2() {
    let r = ctx().resolver();
    assert_eq!(r.resolve('中', Mps2).unwrap(), ["jung1", "jung4"]);
    assert_eq!(r.resolve('學', Mps2).unwrap(), ["shiue2"]);
    assert_eq!(r.resolve('吕', Mps2).unwrap(), ["liu3"]);
    assert_eq!(r.resolve('字', Mps2).unwrap(), ["tz4"]);
}

#[test]
fn deterministic() {
    let r = ctx().resolver();
    assert_eq!(
        r.resolve('的', HanyuPinyin).unwrap(),
        r.resolve('的', HanyuPinyin).unwrap()
    );
}

#[test]
fn non_chinese_not_recognized() {
    let r = ctx().resolver();
    for ch in ['A', 'ガ', 'ç', '匇', '\u{E000}'] {
        assert_eq!(
            r.resolve(ch, HanyuPinyin),
            Err(ResolveError::NotRecognized(ch))
        );
        assert_eq!(r.resolve(ch, WadeGiles), Err(ResolveError::NotRecognized(ch)));
    }
}

#[test]
fn resolve_codepoint() {
    let r = ctx().resolver();
    assert_eq!(
        r.resolve_codepoint(0x674E, HanyuPinyin).unwrap(),
        ["li3"]
    );
    assert_eq!(
        r.resolve_codepoint(0xDFFF, HanyuPinyin),
        Err(ResolveError::Lookup(LookupError::InvalidCharacterInput(0xDFFF)))
    );
    assert_eq!(
        r.resolve_codepoint(0x41, HanyuPinyin),
        Err(ResolveError::NotRecognized('A'))
    );
}

#[test]
fn strict_mode_surfaces_unknown_syllable() {
    let ctx = partial_ctx();
    let err = ctx.resolver().resolve('乐', WadeGiles).unwrap_err();
    assert_eq!(
        err,
        ResolveError::Translate {
            syllable: "yue4".into(),
            source: TranslateError::UnknownSyllable {
                system: HanyuPinyin,
                base: "yue".into(),
            },
        }
    );
}

#[test]
fn strict_mode_surfaces_no_counterpart() {
    let ctx = partial_ctx();
    let err = ctx.resolver().resolve('女', WadeGiles).unwrap_err();
    assert!(matches!(
        err,
        ResolveError::Translate {
            source: TranslateError::NoCounterpart { .. },
            ..
        }
    ));
}

#[test]
fn best_effort_drops_untranslatable_readings() {
    let ctx = partial_ctx();
    let r = ctx.resolver().with_mode(ResolveMode::BestEffort);
    assert_eq!(r.resolve('乐', WadeGiles).unwrap(), ["le4", "yao4"]);
    assert_eq!(r.resolve('女', WadeGiles).unwrap(), ["ju3"]);
    assert_eq!(r.resolve('女', Tongyong).unwrap(), Vec::<String>::new());
}

#[test]
fn first_of_fully_dropped_readings_is_none() {
    let ctx = partial_ctx();
    let r = ctx.resolver().with_mode(ResolveMode::BestEffort);
    assert_eq!(r.first('女', Tongyong), Ok(None));
    assert_eq!(r.first('女', WadeGiles).unwrap().as_deref(), Some("ju3"));
    assert_eq!(r.first('A', Tongyong), Err(ResolveError::NotRecognized('A')));
}

#[test]
fn hanyu_target_skips_translation() {
    let ctx = partial_ctx();
    assert_eq!(
        ctx.resolver().resolve('乐', HanyuPinyin).unwrap(),
        ["le4", "yue4", "yao4"]
    );
}

#[test]
fn formatted() {
    let r = ctx().resolver();
    let upper = |s: &str| s.to_uppercase();
    assert_eq!(
        r.resolve_formatted('偻', HanyuPinyin, &upper).unwrap(),
        ["LOU2", "LÜ3"]
    );
    assert_eq!(
        r.resolve_formatted('李', WadeGiles, &Unformatted).unwrap(),
        ["li3"]
    );
}

#[test]
fn default_mode_is_strict() {
    assert_eq!(ctx().resolver().mode(), ResolveMode::Strict);
}
