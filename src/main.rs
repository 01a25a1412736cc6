#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod ui;

use anyhow::Context;
use cek_sertifikat::DriveConfig;
use iced::Theme;

fn main() -> anyhow::Result<()> {
    let config = DriveConfig::from_env()
        .context("set GOOGLE_API_KEY and GOOGLE_DRIVE_FOLDER_ID before starting")?;

    iced::application("Cek Sertifikat TKA", app::update, app::view)
        .theme(|_| Theme::Dark)
        .window(iced::window::Settings {
            size: iced::Size::new(540.0, 760.0),
            ..Default::default()
        })
        .run_with(move || app::init(config.clone()))?;

    Ok(())
}
