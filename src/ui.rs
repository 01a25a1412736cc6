use cek_sertifikat::{format_created, format_size, DriveFile};
use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Color, Element, Fill};

pub fn view_header<'a, M: 'a>() -> Element<'a, M> {
    column![
        text("Cek Sertifikat TKA")
            .size(26)
            .color(Color::from_rgb(0.9, 0.9, 1.0)),
        text("Masukkan NISN Anda untuk mengunduh sertifikat")
            .size(14)
            .color(Color::from_rgb(0.7, 0.7, 0.7)),
    ]
    .spacing(6)
    .into()
}

pub fn search_card<'a, M: Clone + 'a>(
    value: &'a str,
    loading: bool,
    can_submit: bool,
    on_input: impl Fn(String) -> M + 'a,
    on_submit: M,
) -> Element<'a, M> {
    let input = text_input("Contoh: 1234567890", value)
        .on_input(on_input)
        .on_submit(on_submit.clone())
        .size(18)
        .padding(10);

    let label = if loading { "Mencari..." } else { "Cari Sekarang" };
    let submit = button(text(label).size(16))
        .on_press_maybe(can_submit.then_some(on_submit))
        .padding([10, 18]);

    container(
        column![
            text("Nomor Induk Siswa Nasional (NISN)")
                .size(14)
                .color(Color::from_rgb(0.7, 0.7, 0.7)),
            input,
            container(submit).center_x(Fill),
        ]
        .spacing(12),
    )
    .padding(20)
    .style(|theme| {
        card_style(
            theme,
            Color::from_rgb(0.15, 0.2, 0.25),
            Color::from_rgb(0.3, 0.4, 0.5),
        )
    })
    .into()
}

pub fn error_box<'a, M: 'a>(message: &'a str) -> Element<'a, M> {
    container(text(message).size(14))
        .padding(12)
        .width(Fill)
        .style(|_| container::Style {
            background: Some(iced::Background::Color(Color::from_rgb(0.25, 0.15, 0.15))),
            border: iced::Border {
                color: Color::from_rgb(0.6, 0.3, 0.3),
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        })
        .into()
}

pub fn result_row<'a, M: Clone + 'a>(
    file: &'a DriveFile,
    on_view: M,
    on_download: M,
) -> Element<'a, M> {
    let meta = format!(
        "{} • {}",
        format_size(file.size),
        format_created(&file.created_time)
    );

    let details = column![
        text("Nama File")
            .size(12)
            .color(Color::from_rgb(0.6, 0.6, 0.6)),
        text(&file.name).size(16),
        text(meta).size(13).color(Color::from_rgb(0.7, 0.7, 0.7)),
    ]
    .spacing(4);

    let actions = row![
        button(text("Pratinjau").size(14))
            .on_press(on_view)
            .padding([6, 12]),
        button(text("Unduh PDF").size(14))
            .on_press(on_download)
            .padding([6, 12]),
    ]
    .spacing(8);

    container(
        row![details, Space::with_width(Fill), actions]
            .spacing(10)
            .align_y(iced::Alignment::Center),
    )
    .padding(16)
    .width(Fill)
    .style(|theme| {
        card_style(
            theme,
            Color::from_rgb(0.15, 0.25, 0.2),
            Color::from_rgb(0.3, 0.5, 0.4),
        )
    })
    .into()
}

pub fn card_style(_theme: &iced::Theme, bg_color: Color, border_color: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: border_color,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

/// Open a synthesized Drive link in the system browser.
pub fn open_in_browser(url: &str) {
    #[cfg(target_os = "windows")]
    let _ = std::process::Command::new("cmd")
        .args(["/C", "start", "", url])
        .spawn();

    #[cfg(target_os = "macos")]
    let _ = std::process::Command::new("open").arg(url).spawn();

    #[cfg(all(unix, not(target_os = "macos")))]
    let _ = std::process::Command::new("xdg-open").arg(url).spawn();
}
