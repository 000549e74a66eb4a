//! Network addresses, file paths, and the [`File`] entity.

use tracing::debug;

use crate::choice::{FileType, IpAddressType, Language, Languages, OperatingSystem, OperatingSystems};
use crate::data::computer::{
    FILE_NAME_FORMATS, FILE_NAME_WORDS, base_paths, file_type_for_extension,
};
use crate::error::FakerError;
use crate::person::social_network_id_in;
use crate::random::{fill_bytes, uniform_in_range};
use crate::select::{pick_from_mask, pick_listed, pick_one};
use crate::template::{
    remove_characters, replace_digits, replace_letters, replace_placeholder, split_and_trim,
};

/// Draws an IP address.
///
/// # Example
///
/// ```
/// use locale_faker::{IpAddressType, ip_address};
///
/// let v4 = ip_address(IpAddressType::V4);
/// assert_eq!(v4.split('.').count(), 4);
///
/// let v6 = ip_address(IpAddressType::V6);
/// assert!(v6.split(':').all(|group| group.len() == 4));
/// ```
#[must_use]
pub fn ip_address(kind: IpAddressType) -> String {
    match kind {
        IpAddressType::V4 => {
            let mut octets = [0_u8; 4];
            fill_bytes(&mut octets);
            octets
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(".")
        }
        IpAddressType::V6 => (0..8)
            .map(|_| format!("{:04x}", uniform_in_range(0_u16, u16::MAX)))
            .collect::<Vec<_>>()
            .join(":"),
    }
}

/// Draws a unicast, locally administered MAC address.
#[must_use]
pub fn mac_address() -> String {
    let mut octets = [0_u8; 6];
    fill_bytes(&mut octets);
    if let Some(first) = octets.first_mut() {
        *first = (*first & 0xFE) | 0x02;
    }
    octets
        .iter()
        .map(|octet| format!("{octet:02x}"))
        .collect::<Vec<_>>()
        .join(":")
}

/// Draws a full file path.
///
/// With no usable `extensions` the folder comes from a random file type and
/// the name has no extension. Otherwise the picked extension decides the
/// folder. Extensions outside the catalogue are used as the folder name.
///
/// # Example
///
/// ```
/// use locale_faker::{OperatingSystems, file_path};
///
/// let path = file_path(OperatingSystems::LINUX, "pdf", ',');
/// assert!(path.starts_with("/home/"));
/// assert!(path.contains("/docs/"));
/// assert!(path.ends_with(".pdf"));
/// ```
#[must_use]
pub fn file_path(operating_systems: OperatingSystems, extensions: &str, delimiter: char) -> String {
    let os = pick_from_mask(operating_systems);
    FileParts::draw(os, &split_extensions(extensions, delimiter)).path
}

/// Draws a folder under a user directory, such as
/// `C:\Users\Administrator\docs`.
///
/// # Example
///
/// ```
/// use locale_faker::{OperatingSystems, file_directory};
///
/// let directory = file_directory(OperatingSystems::LINUX);
/// assert!(directory.starts_with("/home/"));
/// assert_eq!(directory.matches('/').count(), 3);
/// ```
#[must_use]
pub fn file_directory(operating_systems: OperatingSystems) -> String {
    folder_path(pick_from_mask(operating_systems), &folder_for(""))
}

/// Draws a file name, with an extension when `extensions` lists any.
#[must_use]
pub fn file_name(extensions: &str, delimiter: char) -> String {
    with_extension(&file_stem(), &pick_extension(&split_extensions(extensions, delimiter)))
}

/// Picks one of the `delimiter`-separated `extensions`. An empty list gives
/// an empty string.
#[must_use]
pub fn file_extension(extensions: &str, delimiter: char) -> String {
    pick_extension(&split_extensions(extensions, delimiter))
}

/// Draws an `https` URL on one of the `tlds`, optionally under one of the
/// `subdomains`.
///
/// # Errors
///
/// Returns [`FakerError::EmptyString`] when `tlds` names no domain.
///
/// # Example
///
/// ```
/// use locale_faker::url;
///
/// let address = url("www", "com", ',').expect("tld given");
/// assert!(address.starts_with("https://www."));
/// assert!(address.ends_with(".com"));
/// ```
pub fn url(subdomains: &str, tlds: &str, delimiter: char) -> Result<String, FakerError> {
    let host = host_name("url", subdomains, tlds, delimiter)?;
    Ok(format!("https://{host}"))
}

/// Draws a host name on one of the `tlds`, optionally under one of the
/// `subdomains`.
///
/// # Errors
///
/// Returns [`FakerError::EmptyString`] when `tlds` names no domain.
pub fn hostname(subdomains: &str, tlds: &str, delimiter: char) -> Result<String, FakerError> {
    host_name("hostname", subdomains, tlds, delimiter)
}

fn host_name(
    function: &'static str,
    subdomains: &str,
    tlds: &str,
    delimiter: char,
) -> Result<String, FakerError> {
    let picked_tld = pick_listed(tlds, delimiter, function, "tlds")?;
    let tld = picked_tld.trim_start_matches('.');
    let subdomain_list = split_extensions(subdomains, delimiter);
    let user = username();
    let labels: Vec<&str> = match subdomain_list.as_slice() {
        [] => vec![user.as_str(), tld],
        listed => vec![pick_one(listed).as_str(), user.as_str(), tld],
    };
    Ok(labels.join("."))
}

/// Lowercase handle safe for paths and host names.
fn username() -> String {
    let language = pick_from_mask::<Language>(Languages::all());
    remove_characters(social_network_id_in(language).translation(), "_").to_lowercase()
}

fn user_directory(os: OperatingSystem) -> String {
    replace_placeholder(*pick_one(base_paths(os)), &username())
}

fn folder_path(os: OperatingSystem, folder: &str) -> String {
    format!("{}{}{folder}", user_directory(os), os.separator())
}

fn split_extensions(list: &str, delimiter: char) -> Vec<String> {
    split_and_trim(list, delimiter)
        .into_iter()
        .map(|entry| entry.trim_start_matches('.').to_owned())
        .filter(|entry| !entry.is_empty())
        .collect()
}

fn pick_extension(extensions: &[String]) -> String {
    if extensions.is_empty() {
        return String::new();
    }
    pick_one(extensions).clone()
}

fn file_stem() -> String {
    let format = replace_placeholder(*pick_one(FILE_NAME_FORMATS), *pick_one(FILE_NAME_WORDS));
    replace_letters(&replace_digits(&format))
}

fn with_extension(stem: &str, extension: &str) -> String {
    if extension.is_empty() {
        stem.to_owned()
    } else {
        format!("{stem}.{extension}")
    }
}

fn folder_for(extension: &str) -> String {
    if extension.is_empty() {
        return pick_one(&FileType::KNOWN).folder().to_owned();
    }
    match file_type_for_extension(extension) {
        FileType::Other => extension.to_owned(),
        known => known.folder().to_owned(),
    }
}

/// Parts of one drawn file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FileParts {
    directory: String,
    extension: String,
    name: String,
    path: String,
}

impl FileParts {
    fn draw(os: OperatingSystem, extensions: &[String]) -> Self {
        let extension = pick_extension(extensions);
        let directory = folder_path(os, &folder_for(&extension));
        let name = with_extension(&file_stem(), &extension);
        let path = format!("{directory}{}{name}", os.separator());
        Self {
            directory,
            extension,
            name,
            path,
        }
    }
}

/// A generated file whose path, directory, name, and extension agree.
///
/// # Example
///
/// ```
/// use locale_faker::{File, OperatingSystems};
///
/// let file = File::new(OperatingSystems::WINDOWS, "mp3, wav", ',');
/// assert_eq!(file.path(), format!("{}\\{}", file.directory(), file.name()));
/// assert!(file.directory().ends_with("\\audio"));
/// assert!(file.path().ends_with(file.name()));
/// assert!(["mp3", "wav"].contains(&file.extension()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    operating_systems: OperatingSystems,
    extensions: Vec<String>,
    operating_system: OperatingSystem,
    parts: FileParts,
}

impl File {
    /// Rolls a file for one of `operating_systems` with one of the
    /// `delimiter`-separated `extensions`.
    #[must_use]
    pub fn new(operating_systems: OperatingSystems, extensions: &str, delimiter: char) -> Self {
        let listed = split_extensions(extensions, delimiter);
        let (operating_system, parts) = roll(operating_systems, &listed);
        Self {
            operating_systems,
            extensions: listed,
            operating_system,
            parts,
        }
    }

    /// Replaces every field with a fresh roll.
    pub fn reroll(&mut self) {
        let (operating_system, parts) = roll(self.operating_systems, &self.extensions);
        self.operating_system = operating_system;
        self.parts = parts;
    }

    /// Selected operating system.
    #[must_use]
    pub const fn operating_system(&self) -> OperatingSystem {
        self.operating_system
    }

    /// Full path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.parts.path
    }

    /// Folder holding the file. Joining it and [`File::name`] with the
    /// system separator gives [`File::path`].
    #[must_use]
    pub fn directory(&self) -> &str {
        &self.parts.directory
    }

    /// File name, with `.extension` when there is one.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.parts.name
    }

    /// Extension without the dot. Empty when none was listed.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.parts.extension
    }
}

fn roll(operating_systems: OperatingSystems, extensions: &[String]) -> (OperatingSystem, FileParts) {
    let os = pick_from_mask(operating_systems);
    debug!(operating_system = ?os, "rolling file");
    (os, FileParts::draw(os, extensions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn mac_addresses_are_unicast_and_locally_administered() {
        for _ in 0..50 {
            let mac = mac_address();
            let groups: Vec<&str> = mac.split(':').collect();
            assert_eq!(groups.len(), 6);
            let first = u8::from_str_radix(groups.first().expect("six groups"), 16)
                .expect("hex octet");
            assert_eq!(first & 0x01, 0);
            assert_eq!(first & 0x02, 0x02);
        }
    }

    #[test]
    fn ipv4_octets_parse_as_bytes() {
        let address = ip_address(IpAddressType::V4);
        assert!(address.split('.').all(|octet| octet.parse::<u8>().is_ok()));
    }

    #[rstest]
    #[case("log", "logs")]
    #[case("PNG", "images")]
    #[case("xyz", "xyz")]
    fn extensions_choose_the_folder(#[case] extension: &str, #[case] folder: &str) {
        assert_eq!(folder_for(extension), folder);
    }

    #[test]
    fn names_without_extensions_have_no_dot() {
        for _ in 0..20 {
            assert!(!file_name("", ',').contains('.'));
            assert_eq!(file_extension(" , ", ','), "");
        }
    }

    #[rstest]
    #[case(OperatingSystems::WINDOWS, '\\')]
    #[case(OperatingSystems::MAC_OS, '/')]
    #[case(OperatingSystems::LINUX, '/')]
    fn paths_use_the_system_separator(#[case] systems: OperatingSystems, #[case] separator: char) {
        let mut file = File::new(systems, ".txt", ',');
        for _ in 0..20 {
            file.reroll();
            assert_eq!(file.extension(), "txt");
            let expected_tail = format!("{separator}docs{separator}{}", file.name());
            assert!(file.path().ends_with(&expected_tail), "{}", file.path());
        }
    }

    #[rstest]
    #[case(OperatingSystems::WINDOWS, '\\', "pdf", "docs")]
    #[case(OperatingSystems::LINUX, '/', "pdf", "docs")]
    #[case(OperatingSystems::MAC_OS, '/', "log", "logs")]
    fn directories_hold_the_file(
        #[case] systems: OperatingSystems,
        #[case] separator: char,
        #[case] extension: &str,
        #[case] folder: &str,
    ) {
        let mut file = File::new(systems, extension, ',');
        for _ in 0..20 {
            file.reroll();
            assert_eq!(
                file.path(),
                format!("{}{separator}{}", file.directory(), file.name())
            );
            let suffix = format!("{separator}{folder}");
            assert!(file.directory().ends_with(&suffix), "{}", file.directory());
        }
    }

    #[test]
    fn file_directories_end_in_a_catalogue_folder() {
        for _ in 0..20 {
            let directory = file_directory(OperatingSystems::WINDOWS);
            let (base, folder) = directory.rsplit_once('\\').expect("has a separator");
            assert!(base.starts_with("C:\\"), "{directory}");
            assert!(
                FileType::KNOWN.iter().any(|kind| kind.folder() == folder),
                "{directory}"
            );
        }
    }

    #[test]
    fn host_names_require_a_tld() {
        let err = hostname("www", "", ',').expect_err("no tld");
        assert_eq!(err.to_string(), "hostname: Invalid string: 'tlds' must not be empty.");

        let host = hostname("", ".org", ',').expect("tld given");
        assert_eq!(host.split('.').count(), 2);
        assert!(host.ends_with(".org"));
        assert!(!host.contains('_'));
    }
}
