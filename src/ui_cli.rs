use std::io::{self, Write};

use crate::app::{AppError, Session};
use crate::config::MAX_DECIMALS;
use crate::i18n::{keys, Translator};
use crate::input::{CombustionForm, FuelOilForm};
use crate::report;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Combustion,
    FuelOil,
    Settings,
    Exit,
}

/// 메뉴 입력 문자열을 선택지로 바꾼다.
pub fn parse_menu_choice(sel: &str) -> Option<MenuChoice> {
    match sel.trim() {
        "1" => Some(MenuChoice::Combustion),
        "2" => Some(MenuChoice::FuelOil),
        "3" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("\n=== {} ===", tr.t(keys::APP_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_COMBUSTION));
    println!("{}", tr.t(keys::MAIN_MENU_FUEL_OIL));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = match read_line(&tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            // 입력 스트림이 닫히면 종료로 간주
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Ok(MenuChoice::Exit)
            }
            Err(e) => return Err(e),
        };
        match parse_menu_choice(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 연소 계산 폼을 입력받아 결과를 출력한다.
pub fn handle_combustion(session: &Session) -> Result<(), AppError> {
    let tr = &session.tr;
    println!("\n-- {} --", tr.t(keys::COMBUSTION_HEADING));
    let mut form = CombustionForm::default();
    for (field, buf) in form.fields_mut() {
        *buf = read_line(&format!("{}: ", tr.field_label(field)))?;
    }
    print_outcome(report::evaluate_combustion_form(
        &form,
        tr,
        session.config.decimals,
    ));
    Ok(())
}

/// 중유 조성 폼을 입력받아 결과를 출력한다.
pub fn handle_fuel_oil(session: &Session) -> Result<(), AppError> {
    let tr = &session.tr;
    println!("\n-- {} --", tr.t(keys::FUEL_OIL_HEADING));
    let mut form = FuelOilForm::default();
    for (field, buf) in form.fields_mut() {
        *buf = read_line(&format!("{}: ", tr.field_label(field)))?;
    }
    print_outcome(report::evaluate_fuel_oil_form(
        &form,
        tr,
        session.config.decimals,
    ));
    Ok(())
}

/// 설정 메뉴를 처리한다. 값이 바뀌었으면 true.
pub fn handle_settings(session: &mut Session) -> Result<bool, AppError> {
    let tr = session.tr.clone();
    println!("\n-- {} --", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        session.config.language
    );
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_DECIMALS),
        session.config.decimals
    );

    let mut changed = false;
    let lang = read_line(&tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    match parse_language_setting(&lang) {
        Ok(Some(code)) => {
            session.set_language(code);
            changed = true;
        }
        Ok(None) => {}
        Err(()) => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }

    let decimals = read_line(&tr.t(keys::SETTINGS_PROMPT_DECIMALS))?;
    match parse_decimals_setting(&decimals) {
        Ok(Some(n)) => {
            session.config.decimals = n;
            changed = true;
        }
        Ok(None) => {}
        Err(()) => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    Ok(changed)
}

/// 빈 입력은 "변경 없음"(Ok(None)), 지원하지 않는 코드는 Err.
pub fn parse_language_setting(input: &str) -> Result<Option<String>, ()> {
    match input.trim().to_lowercase().as_str() {
        "" => Ok(None),
        code @ ("auto" | "uk" | "en") => Ok(Some(code.to_string())),
        _ => Err(()),
    }
}

/// 빈 입력은 "변경 없음", 0..=MAX_DECIMALS 범위 밖이면 Err.
pub fn parse_decimals_setting(input: &str) -> Result<Option<usize>, ()> {
    let s = input.trim();
    if s.is_empty() {
        return Ok(None);
    }
    match s.parse::<usize>() {
        Ok(n) if n <= MAX_DECIMALS => Ok(Some(n)),
        _ => Err(()),
    }
}

fn print_outcome(outcome: Result<String, String>) {
    match outcome {
        Ok(text) => println!("\n{text}"),
        Err(message) => println!("\n{message}"),
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choices() {
        assert_eq!(parse_menu_choice(" 1\n"), Some(MenuChoice::Combustion));
        assert_eq!(parse_menu_choice("2"), Some(MenuChoice::FuelOil));
        assert_eq!(parse_menu_choice("0"), Some(MenuChoice::Exit));
        assert_eq!(parse_menu_choice("9"), None);
    }

    #[test]
    fn settings_inputs() {
        assert_eq!(parse_language_setting("\n"), Ok(None));
        assert_eq!(parse_language_setting("EN"), Ok(Some("en".into())));
        assert!(parse_language_setting("de").is_err());
        assert_eq!(parse_decimals_setting("3"), Ok(Some(3)));
        assert_eq!(parse_decimals_setting(""), Ok(None));
        assert!(parse_decimals_setting("7").is_err());
        assert!(parse_decimals_setting("-1").is_err());
    }
}
