use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::i18n::{self, Translator};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("{0}")]
    Config(#[from] ConfigError),
}

/// 실행 중 공유되는 설정과 번역기.
///
/// `--lang` 값은 설정 파일에 저장하지 않고 세션 동안만 우선 적용한다.
pub struct Session {
    pub config: Config,
    pub config_path: PathBuf,
    pub tr: Translator,
    cli_lang: String,
}

impl Session {
    /// CLI 언어 인자와 설정으로 번역기를 구성한다.
    pub fn new(config: Config, config_path: PathBuf, cli_lang: &str) -> Self {
        let tr = translator_for(cli_lang, &config);
        info!(language = tr.language_code(), "session started");
        Self {
            config,
            config_path,
            tr,
            cli_lang: cli_lang.to_string(),
        }
    }

    /// 사용자가 언어를 직접 고르면 `--lang` 우선순위는 해제된다.
    pub fn set_language(&mut self, code: String) {
        self.config.language = code;
        self.cli_lang = "auto".into();
    }

    /// 설정이 바뀐 뒤 번역기를 다시 만든다.
    pub fn reload_translator(&mut self) {
        self.tr = translator_for(&self.cli_lang, &self.config);
    }

    pub fn save_config(&self) -> Result<(), AppError> {
        self.config.save(&self.config_path)?;
        Ok(())
    }
}

/// CLI 플래그 → 설정 → 시스템 로케일 순으로 언어를 정해 번역기를 만든다.
pub fn translator_for(cli_lang: &str, config: &Config) -> Translator {
    let lang = i18n::resolve_language(cli_lang, Some(config.language.as_str()));
    Translator::new_with_pack(&lang, config.language_pack_dir.as_deref())
}

/// CLI 대화형 메뉴의 메인 루프를 실행한다.
pub fn run(session: &mut Session) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(&session.tr)? {
            MenuChoice::Combustion => ui_cli::handle_combustion(session)?,
            MenuChoice::FuelOil => ui_cli::handle_fuel_oil(session)?,
            MenuChoice::Settings => {
                if ui_cli::handle_settings(session)? {
                    session.save_config()?;
                    session.reload_translator();
                    println!("{}", session.tr.t(i18n::keys::SETTINGS_SAVED));
                }
            }
            MenuChoice::Exit => {
                println!("{}", session.tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
