use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const APP_TITLE: &str = "general.app_title";
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_COMBUSTION: &str = "main_menu.combustion";
    pub const MAIN_MENU_FUEL_OIL: &str = "main_menu.fuel_oil";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const TAB_COMBUSTION: &str = "tab.combustion";
    pub const TAB_FUEL_OIL: &str = "tab.fuel_oil";
    pub const COMBUSTION_HEADING: &str = "combustion.heading";
    pub const FUEL_OIL_HEADING: &str = "fuel_oil.heading";
    pub const BUTTON_CALCULATE: &str = "button.calculate";

    /// 연소 폼 전체 오류 메시지
    pub const COMBUSTION_INVALID: &str = "combustion.invalid";
    /// 중유 폼 전체 오류 메시지
    pub const FUEL_OIL_INVALID: &str = "fuel_oil.invalid";
    pub const DEGENERATE_DIVISION: &str = "error.degenerate_division";

    pub const REPORT_LOWER_HEAT: &str = "report.lower_heat";
    pub const REPORT_LOWER_HEAT_DRY: &str = "report.lower_heat_dry";
    pub const REPORT_LOWER_HEAT_COMBUSTIBLE: &str = "report.lower_heat_combustible";
    pub const REPORT_DRY_BASIS: &str = "report.dry_basis";
    pub const REPORT_COMBUSTIBLE_BASIS: &str = "report.combustible_basis";
    pub const REPORT_WORKING_MASS: &str = "report.working_mass";
    pub const UNIT_MJ_PER_KG: &str = "unit.mj_per_kg";
    pub const UNIT_MG_PER_KG: &str = "unit.mg_per_kg";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_CURRENT_DECIMALS: &str = "settings.current_decimals";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_PROMPT_DECIMALS: &str = "settings.prompt_decimals";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_SAVE: &str = "settings.save";
    pub const SETTINGS_LANGUAGE: &str = "settings.language";
    pub const SETTINGS_DECIMALS: &str = "settings.decimals";
    pub const SETTINGS_ALPHA: &str = "settings.alpha";
    pub const SETTINGS_LANG_AUTO: &str = "settings.lang_auto";

    pub const REPORT_SAVE: &str = "report.save";
    pub const REPORT_SAVED_TO: &str = "report.saved_to";

    /// 필드 라벨 키 접두어. `field.carbon` 형태로 조합한다.
    pub const FIELD_PREFIX: &str = "field";
    /// 결과 보고서의 성분 이름 키 접두어. `element.carbon` 형태.
    pub const ELEMENT_PREFIX: &str = "element";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Uk,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Uk
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Uk => "uk",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
///
/// 조회 순서: 외부 언어팩 → 내장 언어팩 → 영어 내장팩 → 키 자체.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
    built_in: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Translator {
    /// 언어 코드(uk/en)에 따라 내장 언어팩만으로 번역기를 생성한다.
    pub fn new(lang_code: &str) -> Self {
        Self::new_with_pack(lang_code, None)
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let lang = Language::from_code(lang_code);
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang,
            overrides,
            built_in: built_in_pack(lang),
            fallback: built_in_pack(Language::En),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 어느 언어팩에도 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key))
            .or_else(|| self.built_in.get(key))
            .or_else(|| self.fallback.get(key))
            .cloned()
    }

    /// 번역을 가져온다. 누락된 키는 키 문자열 그대로 돌려준다.
    pub fn t(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| key.to_string())
    }

    /// 입력 필드 라벨(`field.<name>`)을 가져온다.
    pub fn field_label(&self, field: &str) -> String {
        self.t(&format!("{}.{field}", keys::FIELD_PREFIX))
    }

    /// 보고서에 쓰이는 성분 이름(`element.<name>`)을 가져온다.
    pub fn element_label(&self, field: &str) -> String {
        self.t(&format!("{}.{field}", keys::ELEMENT_PREFIX))
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "uk".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        "ua" => Some("uk".into()),
        other if other.starts_with("uk") => Some("uk".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "uk" => Some("uk".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().and_then(|loc| normalize_locale_string(&loc)) {
        return Some(code);
    }
    for var in ["LC_ALL", "LANG"] {
        if let Some(code) = std::env::var(var)
            .ok()
            .and_then(|v| normalize_locale_string(&v))
        {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵 또는 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., uk-ua)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., uk)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

pub(crate) fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
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
fn built_in_pack(lang: Language) -> HashMap<String, String> {
    let src = match lang {
        Language::Uk => include_str!("../locales/uk-ua.toml"),
        Language::En => include_str!("../locales/en-us.toml"),
    };
    parse_toml_to_map(src).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_strings_map_to_supported_codes() {
        assert_eq!(normalize_locale_string("uk_UA.UTF-8").as_deref(), Some("uk"));
        assert_eq!(normalize_locale_string("en-US").as_deref(), Some("en"));
        assert_eq!(normalize_locale_string("de_DE"), None);
    }

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let map = parse_toml_to_map("[report]\nsave = \"Save\"\n").unwrap();
        assert_eq!(map.get("report.save").map(String::as_str), Some("Save"));
    }
}
