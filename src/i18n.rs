use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_RESISTOR_LINES: &str = "main_menu.resistor_lines";
    pub const MAIN_MENU_SOURCE_LOAD: &str = "main_menu.source_load";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_INVALID_UNIT: &str = "error.invalid_unit";

    pub const RESISTOR_HEADING: &str = "resistor.heading";
    pub const PROMPT_U_MIN: &str = "prompt.u_min";
    pub const PROMPT_U_MAX: &str = "prompt.u_max";
    pub const PROMPT_U_UNIT: &str = "prompt.u_unit";
    pub const PROMPT_I_UNIT: &str = "prompt.i_unit";
    /// `{n}` 자리에 저항 번호가 들어간다.
    pub const PROMPT_RESISTOR: &str = "prompt.resistor";

    pub const SOURCE_HEADING: &str = "source.heading";
    pub const PROMPT_UQ: &str = "prompt.uq";
    pub const PROMPT_RI: &str = "prompt.ri";
    pub const PROMPT_RL: &str = "prompt.rl";
    pub const RESULT_OPERATING_POINT: &str = "result.operating_point";
    pub const RESULT_OPERATING_POINT_EXACT: &str = "result.operating_point_exact";
    pub const RESULT_OPERATING_POINT_NONE: &str = "result.operating_point_none";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const PROMPT_KIND: &str = "prompt.kind";
    pub const PROMPT_VALUE: &str = "prompt.value";
    pub const PROMPT_FROM_UNIT: &str = "prompt.from_unit";
    pub const PROMPT_TO_UNIT: &str = "prompt.to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    De,
    Ko,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("de") {
            Language::De
        } else if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en-us",
            Language::De => "de-de",
            Language::Ko => "ko-kr",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    strings: HashMap<String, String>,
    /// 선택 언어에 없는 키는 영어로 폴백
    fallback: HashMap<String, String>,
}

impl Translator {
    /// 언어 코드(en/de/ko)에 따라 내장 언어팩으로 번역기를 생성한다. 알 수 없는 코드는 en.
    pub fn new(lang_code: &str) -> Self {
        Self::new_with_pack(lang_code, None)
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let lang = Language::from_code(lang_code);
        let strings = pack_dir
            .and_then(|dir| load_overrides(dir, lang.as_code()))
            .or_else(|| built_in_pack(lang.as_code()))
            .unwrap_or_default();
        Self {
            lang,
            strings,
            fallback: built_in_pack("en-us").unwrap_or_default(),
        }
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩과 영어 폴백 모두에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.strings
            .get(key)
            .or_else(|| self.fallback.get(key))
            .cloned()
    }

    /// 번역을 가져온다. 없으면 키 자체를 반환한다.
    pub fn t(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| key.to_string())
    }

    /// `{name}` 자리표시자를 채운 번역.
    pub fn t_with(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(&self.t(key), vars)
    }
}

pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("en") => Some("en-us".into()),
        other if other.starts_with("de") => Some("de-de".into()),
        other if other.starts_with("ko") => Some("ko-kr".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    normalize_lang(&lang)
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫/중첩 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., de-de)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., de)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    log::debug!("no language pack for {lang} in {dir}");
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "de-de" | "de" => parse_toml_to_map(include_str!("../locales/de-de.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flag_wins_over_config() {
        assert_eq!(resolve_language("de", Some("ko-kr")), "de-de");
        assert_eq!(resolve_language("auto", Some("ko")), "ko-kr");
    }

    #[test]
    fn built_in_packs_share_keys() {
        let en = built_in_pack("en-us").unwrap();
        for code in ["de-de", "ko-kr"] {
            let other = built_in_pack(code).unwrap();
            for key in en.keys() {
                assert!(other.contains_key(key), "{code} missing {key}");
            }
        }
    }

    #[test]
    fn nested_tables_become_dotted_keys() {
        let tr = Translator::new("en-us");
        assert_eq!(tr.t("gui.tab.source"), "Voltage Source Characteristics");
        assert_eq!(tr.t(keys::APP_EXIT), "Exiting application.");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn template_placeholders_are_filled() {
        let tr = Translator::new("de");
        let s = tr.t_with(keys::PROMPT_RESISTOR, &[("n", "2".to_string())]);
        assert!(s.starts_with("Widerstand R2"), "{s}");
    }
}
