// src/ui/i18n.rs
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Id,
    Ru,
    De,
}

impl Locale {
    pub fn next(self) -> Self {
        match self {
            Locale::En => Locale::Id,
            Locale::Id => Locale::Ru,
            Locale::Ru => Locale::De,
            Locale::De => Locale::En,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Id => "Bahasa Indonesia",
            Locale::Ru => "Русский",
            Locale::De => "Deutsch",
        }
    }
}

/// Every user-facing string the editor shows. Placeholders are `{0}`, `{1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    Ready,
    NewFile,
    Loaded,
    SwitchedTo,
    Saved,
    SavedAs,
    TabClosed,
    LanguageChanged,
    ThemeChanged,
    WordWrapOn,
    WordWrapOff,
    NoSuggestions,
    Copied,
    CutDone,
    Pasted,
    ClipboardEmpty,
    InternalClipboard,
    SelectedAll,
    Found,
    NotFound,
    Position,
    UnsavedTitle,
    UnsavedChanges,
    Save,
    Discard,
    Cancel,
    Error,
    Ok,
    OpenTitle,
    SaveAsTitle,
    SuggestionsTitle,
    ShortcutsTitle,
    FindTitle,
    AboutTitle,
}

pub fn text(locale: Locale, msg: Msg) -> &'static str {
    match locale {
        Locale::En => english(msg),
        Locale::Id => indonesian(msg),
        Locale::Ru => russian(msg),
        Locale::De => german(msg),
    }
}

/// Looks up `msg` and substitutes positional arguments.
pub fn format(locale: Locale, msg: Msg, args: &[&str]) -> String {
    args.iter()
        .enumerate()
        .fold(text(locale, msg).to_string(), |acc, (i, arg)| {
            acc.replace(&format!("{{{i}}}"), arg)
        })
}

fn english(msg: Msg) -> &'static str {
    match msg {
        Msg::Ready => "Ready",
        Msg::NewFile => "New file created",
        Msg::Loaded => "Loaded {0}",
        Msg::SwitchedTo => "Switched to {0}",
        Msg::Saved => "Saved {0}",
        Msg::SavedAs => "Saved as {0}",
        Msg::TabClosed => "Tab closed",
        Msg::LanguageChanged => "Language: {0}",
        Msg::ThemeChanged => "Theme: {0}",
        Msg::WordWrapOn => "Word wrap ON",
        Msg::WordWrapOff => "Word wrap OFF",
        Msg::NoSuggestions => "No suggestions",
        Msg::Copied => "Copied to clipboard",
        Msg::CutDone => "Cut to clipboard",
        Msg::Pasted => "Pasted",
        Msg::ClipboardEmpty => "Clipboard is empty",
        Msg::InternalClipboard => "(internal clipboard)",
        Msg::SelectedAll => "All text selected",
        Msg::Found => "Found at Ln {0}, Col {1}",
        Msg::NotFound => "'{0}' not found",
        Msg::Position => "Ln {0}, Col {1}",
        Msg::UnsavedTitle => "Unsaved Changes",
        Msg::UnsavedChanges => "has unsaved changes. Do you want to save before continuing?",
        Msg::Save => "Save",
        Msg::Discard => "Discard",
        Msg::Cancel => "Cancel",
        Msg::Error => "Error",
        Msg::Ok => "OK",
        Msg::OpenTitle => "Open File",
        Msg::SaveAsTitle => "Save File As",
        Msg::SuggestionsTitle => "Suggestions",
        Msg::ShortcutsTitle => "Keyboard Shortcuts",
        Msg::FindTitle => "Find",
        Msg::AboutTitle => "About",
    }
}

fn indonesian(msg: Msg) -> &'static str {
    match msg {
        Msg::Ready => "Siap",
        Msg::NewFile => "Berkas baru dibuat",
        Msg::Loaded => "Dimuat {0}",
        Msg::SwitchedTo => "Beralih ke {0}",
        Msg::Saved => "Disimpan {0}",
        Msg::SavedAs => "Disimpan sebagai {0}",
        Msg::TabClosed => "Tab ditutup",
        Msg::LanguageChanged => "Bahasa: {0}",
        Msg::ThemeChanged => "Tema: {0}",
        Msg::WordWrapOn => "Bungkus kata AKTIF",
        Msg::WordWrapOff => "Bungkus kata NONAKTIF",
        Msg::NoSuggestions => "Tidak ada saran",
        Msg::Copied => "Disalin ke clipboard",
        Msg::CutDone => "Dipotong ke clipboard",
        Msg::Pasted => "Ditempel",
        Msg::ClipboardEmpty => "Clipboard kosong",
        Msg::InternalClipboard => "(clipboard internal)",
        Msg::SelectedAll => "Semua teks dipilih",
        Msg::Found => "Ditemukan di Br {0}, Kl {1}",
        Msg::NotFound => "'{0}' tidak ditemukan",
        Msg::Position => "Br {0}, Kl {1}",
        Msg::UnsavedTitle => "Perubahan Belum Disimpan",
        Msg::UnsavedChanges => "memiliki perubahan yang belum disimpan. Simpan sebelum melanjutkan?",
        Msg::Save => "Simpan",
        Msg::Discard => "Abaikan",
        Msg::Cancel => "Batal",
        Msg::Error => "Kesalahan",
        Msg::Ok => "OK",
        Msg::OpenTitle => "Buka Berkas",
        Msg::SaveAsTitle => "Simpan Berkas Sebagai",
        Msg::SuggestionsTitle => "Saran",
        Msg::ShortcutsTitle => "Pintasan Keyboard",
        Msg::FindTitle => "Cari",
        Msg::AboutTitle => "Tentang",
    }
}

fn russian(msg: Msg) -> &'static str {
    match msg {
        Msg::Ready => "Готово",
        Msg::NewFile => "Создан новый файл",
        Msg::Loaded => "Загружен {0}",
        Msg::SwitchedTo => "Переключено на {0}",
        Msg::Saved => "Сохранён {0}",
        Msg::SavedAs => "Сохранён как {0}",
        Msg::TabClosed => "Вкладка закрыта",
        Msg::LanguageChanged => "Язык: {0}",
        Msg::ThemeChanged => "Тема: {0}",
        Msg::WordWrapOn => "Перенос строк ВКЛ",
        Msg::WordWrapOff => "Перенос строк ВЫКЛ",
        Msg::NoSuggestions => "Нет подсказок",
        Msg::Copied => "Скопировано в буфер обмена",
        Msg::CutDone => "Вырезано в буфер обмена",
        Msg::Pasted => "Вставлено",
        Msg::ClipboardEmpty => "Буфер обмена пуст",
        Msg::InternalClipboard => "(внутренний буфер)",
        Msg::SelectedAll => "Весь текст выделен",
        Msg::Found => "Найдено: стр {0}, кол {1}",
        Msg::NotFound => "'{0}' не найдено",
        Msg::Position => "Стр {0}, Кол {1}",
        Msg::UnsavedTitle => "Несохранённые изменения",
        Msg::UnsavedChanges => "имеет несохранённые изменения. Сохранить перед продолжением?",
        Msg::Save => "Сохранить",
        Msg::Discard => "Отменить",
        Msg::Cancel => "Отмена",
        Msg::Error => "Ошибка",
        Msg::Ok => "OK",
        Msg::OpenTitle => "Открыть файл",
        Msg::SaveAsTitle => "Сохранить как",
        Msg::SuggestionsTitle => "Подсказки",
        Msg::ShortcutsTitle => "Горячие клавиши",
        Msg::FindTitle => "Найти",
        Msg::AboutTitle => "О программе",
    }
}

fn german(msg: Msg) -> &'static str {
    match msg {
        Msg::Ready => "Bereit",
        Msg::NewFile => "Neue Datei erstellt",
        Msg::Loaded => "{0} geladen",
        Msg::SwitchedTo => "Gewechselt zu {0}",
        Msg::Saved => "{0} gespeichert",
        Msg::SavedAs => "Gespeichert als {0}",
        Msg::TabClosed => "Tab geschlossen",
        Msg::LanguageChanged => "Sprache: {0}",
        Msg::ThemeChanged => "Design: {0}",
        Msg::WordWrapOn => "Zeilenumbruch AN",
        Msg::WordWrapOff => "Zeilenumbruch AUS",
        Msg::NoSuggestions => "Keine Vorschläge",
        Msg::Copied => "In die Zwischenablage kopiert",
        Msg::CutDone => "In die Zwischenablage ausgeschnitten",
        Msg::Pasted => "Eingefügt",
        Msg::ClipboardEmpty => "Zwischenablage ist leer",
        Msg::InternalClipboard => "(interne Zwischenablage)",
        Msg::SelectedAll => "Gesamter Text markiert",
        Msg::Found => "Gefunden bei Z {0}, Sp {1}",
        Msg::NotFound => "'{0}' nicht gefunden",
        Msg::Position => "Z {0}, Sp {1}",
        Msg::UnsavedTitle => "Ungespeicherte Änderungen",
        Msg::UnsavedChanges => "hat ungespeicherte Änderungen. Vor dem Fortfahren speichern?",
        Msg::Save => "Speichern",
        Msg::Discard => "Verwerfen",
        Msg::Cancel => "Abbrechen",
        Msg::Error => "Fehler",
        Msg::Ok => "OK",
        Msg::OpenTitle => "Datei öffnen",
        Msg::SaveAsTitle => "Speichern unter",
        Msg::SuggestionsTitle => "Vorschläge",
        Msg::ShortcutsTitle => "Tastenkombinationen",
        Msg::FindTitle => "Suchen",
        Msg::AboutTitle => "Über",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_positions() {
        assert_eq!(format(Locale::En, Msg::Position, &["3", "7"]), "Ln 3, Col 7");
        assert_eq!(format(Locale::De, Msg::Saved, &["a.txt"]), "a.txt gespeichert");
    }

    #[test]
    fn test_language_status_names_locale() {
        let next = Locale::En.next();
        assert_eq!(
            format(next, Msg::LanguageChanged, &[next.name()]),
            "Bahasa: Bahasa Indonesia"
        );
    }

    #[test]
    fn test_locale_cycle_and_serde() {
        assert_eq!(Locale::De.next(), Locale::En);
        let locale: Locale = serde_json::from_str("\"ru\"").unwrap();
        assert_eq!(text(locale, Msg::Ready), "Готово");
    }
}
