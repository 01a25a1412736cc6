use crate::ui;
use cek_sertifikat::{
    download_link, filter_input, view_link, DriveClient, DriveConfig, DriveFile, SearchError,
    NISN_LEN,
};
use iced::widget::{column, container, scrollable, text, Space};
use iced::{Element, Fill, Task};

#[derive(Debug, Clone)]
pub enum Message {
    NisnChanged(String),
    Submit,
    SearchFinished(Result<Vec<DriveFile>, SearchError>),
    OpenLink(String),
}

pub struct State {
    client: DriveClient,
    nisn: String,
    results: Vec<DriveFile>,
    error: String,
    loading: bool,
    searched: bool,
}

impl State {
    pub fn new(config: DriveConfig) -> Self {
        Self {
            client: DriveClient::new(config),
            nisn: String::new(),
            results: Vec::new(),
            error: String::new(),
            loading: false,
            searched: false,
        }
    }

    /// Submit is allowed only with a complete NISN and no search in flight.
    fn can_submit(&self) -> bool {
        !self.loading && self.nisn.len() == NISN_LEN
    }
}

pub fn init(config: DriveConfig) -> (State, Task<Message>) {
    (State::new(config), Task::none())
}

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::NisnChanged(value) => {
            state.nisn = filter_input(&value);
            Task::none()
        }
        Message::Submit => {
            // Guards against Enter-key submission with a short NISN and
            // against re-entry while a search is already in flight.
            if !state.can_submit() {
                return Task::none();
            }
            state.error.clear();
            state.results.clear();
            state.loading = true;
            state.searched = true;

            let client = state.client.clone();
            let nisn = state.nisn.clone();
            Task::perform(
                async move { client.search(&nisn).await },
                Message::SearchFinished,
            )
        }
        Message::SearchFinished(result) => {
            state.loading = false;
            match result {
                Ok(files) => {
                    if files.is_empty() {
                        state.error =
                            "Tidak ditemukan sertifikat dengan NISN tersebut".to_string();
                    }
                    state.results = files;
                }
                Err(e) => state.error = e.to_indonesian(),
            }
            Task::none()
        }
        Message::OpenLink(url) => {
            ui::open_in_browser(&url);
            Task::none()
        }
    }
}

pub fn view(state: &State) -> Element<'_, Message> {
    let mut content = column![
        ui::view_header(),
        Space::with_height(15),
        ui::search_card(
            &state.nisn,
            state.loading,
            state.can_submit(),
            Message::NisnChanged,
            Message::Submit,
        ),
    ]
    .spacing(5)
    .padding(15);

    if state.searched {
        content = content.push(Space::with_height(15));

        if !state.error.is_empty() {
            content = content.push(ui::error_box(&state.error));
        }

        if !state.results.is_empty() {
            let mut list = column![text("Hasil Pencarian").size(20)].spacing(12);
            for file in &state.results {
                list = list.push(ui::result_row(
                    file,
                    Message::OpenLink(view_link(&file.id)),
                    Message::OpenLink(download_link(&file.id)),
                ));
            }
            content = content.push(list);
        }
    }

    container(scrollable(content)).width(Fill).height(Fill).into()
}
