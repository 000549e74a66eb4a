//! Filesystem layouts, file names, and the extension catalogue.

use crate::choice::{FileType, OperatingSystem};

/// Base directories. `{}` is replaced by a username.
pub(crate) const fn base_paths(os: OperatingSystem) -> &'static [&'static str] {
    match os {
        OperatingSystem::Windows => &[
            "C:\\{}",
            "C:\\Users\\{}",
            "C:\\Users\\Administrator",
            "C:\\Users\\Public",
            "D:\\{}",
        ],
        OperatingSystem::MacOs => &["/Users/{}", "/Users/Administrator"],
        OperatingSystem::Linux => &["/home/{}", "/home/Administrator"],
    }
}

/// File name stems. `{}` takes a word, `#` a digit and `@` a letter.
pub(crate) const FILE_NAME_FORMATS: &[&str] = &[
    "{}", "{}##", "{}####", "{}_##", "{}_####", "{}_@@##", "{}_@@####",
];

pub(crate) const FILE_NAME_WORDS: &[&str] = &[
    "alex", "anna", "apple", "atlas", "autumn", "bob", "book", "breeze", "bright", "cedar",
    "cloud", "coral", "dawn", "delta", "draft", "echo", "ember", "final", "fox", "frost",
    "grace", "harbor", "hope", "iris", "jade", "juniper", "lake", "leaf", "luna", "maple",
    "meadow", "memo", "nova", "oak", "ocean", "orbit", "pearl", "pine", "plan", "quill",
    "river", "robin", "sage", "scan", "spark", "storm", "summit", "tide", "willow", "zen",
];

const CATALOGUE: &[(FileType, &[&str])] = &[
    (FileType::Application, &["app", "lnk", "desktop", "exe"]),
    (
        FileType::Archive,
        &["zip", "rar", "7z", "tar", "iso", "gz", "bz2", "xz", "tgz", "tbz2", "txz"],
    ),
    (
        FileType::Audio,
        &["mp3", "wav", "flac", "aac", "ogg", "m4a", "wma", "aiff"],
    ),
    (
        FileType::Configuration,
        &["ini", "conf", "config", "plist", "bak", "reg", "service"],
    ),
    (
        FileType::Development,
        &[
            "html", "htm", "css", "js", "py", "java", "class", "c", "cpp", "cc", "cxx", "hxx",
            "h", "hpp", "cs", "vb", "go", "rb", "lua", "sql", "sh", "bat", "cmd", "php", "json",
            "xml", "yml", "yaml",
        ],
    ),
    (
        FileType::Document,
        &[
            "txt", "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "rtf", "odt", "ods",
            "odp", "epub", "md", "tex", "csv", "pages", "numbers", "key",
        ],
    ),
    (FileType::Font, &["ttf", "otf", "fon", "ttc"]),
    (
        FileType::Image,
        &[
            "jpg", "jpeg", "png", "gif", "bmp", "tiff", "tif", "webp", "svg", "ai", "eps", "psd",
            "raw", "cr2", "nef", "arw",
        ],
    ),
    (
        FileType::Installer,
        &["msi", "dmg", "pkg", "deb", "rpm", "appimage", "flatpak", "snap"],
    ),
    (FileType::Library, &["dll", "so", "a"]),
    (FileType::Log, &["log"]),
    (
        FileType::Temporary,
        &["tmp", "temp", "cache", "swp", "sock", "lock", "pid", "sav"],
    ),
    (
        FileType::Video,
        &["mp4", "mkv", "avi", "mov", "webm", "flv", "m4v", "ts"],
    ),
];

/// Classifies an extension, ignoring ASCII case and a leading dot.
pub(crate) fn file_type_for_extension(extension: &str) -> FileType {
    let bare = extension.trim_start_matches('.');
    CATALOGUE
        .iter()
        .find(|(_, extensions)| {
            extensions
                .iter()
                .any(|known| known.eq_ignore_ascii_case(bare))
        })
        .map_or(FileType::Other, |(kind, _)| *kind)
}
