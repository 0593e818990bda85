// file: src/config/launch.rs
// version: 1.1.0
// guid: d043e86e-bd91-4acc-956e-5944a2f67e68

//! VM launch configuration and its builder

use super::{Mode, DEFAULT_CORES, DEFAULT_MEMORY_GB, DEFAULT_SSH_PORT};
use std::ffi::{OsStr, OsString};

/// Immutable configuration for a single qwr invocation.
///
/// Numeric-looking fields are kept as opaque strings and paths as raw
/// `OsString`s; both are forwarded verbatim into the generated commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    mode: Mode,
    iso: Option<OsString>,
    size: Option<String>,
    cores: String,
    memory: String,
    image: Option<OsString>,
    extra_disk: Option<OsString>,
    ssh_port: String,
    use_tpm: bool,
    use_secure_boot: bool,
}

impl LaunchConfig {
    /// Start a builder with every default applied
    pub fn builder() -> LaunchConfigBuilder {
        LaunchConfigBuilder::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// ISO image used as the install medium
    pub fn iso(&self) -> Option<&OsStr> {
        self.iso.as_deref()
    }

    /// Disk size in GB, without unit suffix
    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    pub fn cores(&self) -> &str {
        &self.cores
    }

    /// Memory size in GB, without unit suffix
    pub fn memory(&self) -> &str {
        &self.memory
    }

    /// Primary disk image
    pub fn image(&self) -> Option<&OsStr> {
        self.image.as_deref()
    }

    /// Secondary disk attached after the display segment
    pub fn extra_disk(&self) -> Option<&OsStr> {
        self.extra_disk.as_deref()
    }

    pub fn ssh_port(&self) -> &str {
        &self.ssh_port
    }

    pub fn use_tpm(&self) -> bool {
        self.use_tpm
    }

    pub fn use_secure_boot(&self) -> bool {
        self.use_secure_boot
    }

    /// Same configuration with a different mode, for checking one set of
    /// flags against several modes
    pub fn with_mode(&self, mode: Mode) -> Self {
        Self {
            mode,
            ..self.clone()
        }
    }
}

/// Accumulates field updates during the left-to-right argument scan.
///
/// Later updates to the same field overwrite earlier ones.
#[derive(Debug, Clone)]
pub struct LaunchConfigBuilder {
    mode: Option<Mode>,
    iso: Option<OsString>,
    size: Option<String>,
    cores: String,
    memory: String,
    image: Option<OsString>,
    extra_disk: Option<OsString>,
    ssh_port: String,
    use_tpm: bool,
    use_secure_boot: bool,
}

impl Default for LaunchConfigBuilder {
    fn default() -> Self {
        Self {
            mode: None,
            iso: None,
            size: None,
            cores: DEFAULT_CORES.to_string(),
            memory: DEFAULT_MEMORY_GB.to_string(),
            image: None,
            extra_disk: None,
            ssh_port: DEFAULT_SSH_PORT.to_string(),
            use_tpm: false,
            use_secure_boot: false,
        }
    }
}

impl LaunchConfigBuilder {
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn iso(mut self, iso: impl Into<OsString>) -> Self {
        self.iso = Some(iso.into());
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn cores(mut self, cores: impl Into<String>) -> Self {
        self.cores = cores.into();
        self
    }

    pub fn memory(mut self, memory: impl Into<String>) -> Self {
        self.memory = memory.into();
        self
    }

    pub fn image(mut self, image: impl Into<OsString>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn extra_disk(mut self, extra_disk: impl Into<OsString>) -> Self {
        self.extra_disk = Some(extra_disk.into());
        self
    }

    pub fn ssh_port(mut self, ssh_port: impl Into<String>) -> Self {
        self.ssh_port = ssh_port.into();
        self
    }

    pub fn tpm(mut self, enabled: bool) -> Self {
        self.use_tpm = enabled;
        self
    }

    pub fn secure_boot(mut self, enabled: bool) -> Self {
        self.use_secure_boot = enabled;
        self
    }

    /// Mode selected so far, if any
    pub fn current_mode(&self) -> Option<Mode> {
        self.mode
    }

    /// Freeze the configuration. Returns `None` when no mode was selected.
    pub fn build(self) -> Option<LaunchConfig> {
        Some(LaunchConfig {
            mode: self.mode?,
            iso: self.iso,
            size: self.size,
            cores: self.cores,
            memory: self.memory,
            image: self.image,
            extra_disk: self.extra_disk,
            ssh_port: self.ssh_port,
            use_tpm: self.use_tpm,
            use_secure_boot: self.use_secure_boot,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(value: &str) -> Option<&OsStr> {
        Some(OsStr::new(value))
    }

    #[test]
    fn test_builder_applies_defaults() {
        // Arrange & Act
        let config = LaunchConfig::builder().mode(Mode::Run).build().unwrap();

        // Assert
        assert_eq!(config.mode(), Mode::Run);
        assert_eq!(config.cores(), "1");
        assert_eq!(config.memory(), "1");
        assert_eq!(config.ssh_port(), "2222");
        assert_eq!(config.iso(), None);
        assert_eq!(config.size(), None);
        assert_eq!(config.image(), None);
        assert_eq!(config.extra_disk(), None);
        assert!(!config.use_tpm());
        assert!(!config.use_secure_boot());
    }

    #[test]
    fn test_builder_without_mode_yields_none() {
        assert!(LaunchConfig::builder().image("disk.qcow2").build().is_none());
    }

    #[test]
    fn test_builder_last_update_wins() {
        let config = LaunchConfig::builder()
            .memory("2")
            .memory("8")
            .image("a.qcow2")
            .image("b.qcow2")
            .mode(Mode::Ssh)
            .build()
            .unwrap();

        assert_eq!(config.memory(), "8");
        assert_eq!(config.image(), os("b.qcow2"));
    }

    #[test]
    fn test_values_are_kept_verbatim() {
        let config = LaunchConfig::builder()
            .mode(Mode::Run)
            .cores("lots")
            .memory("-3")
            .build()
            .unwrap();

        assert_eq!(config.cores(), "lots");
        assert_eq!(config.memory(), "-3");
    }

    #[test]
    fn test_with_mode_keeps_every_other_field() {
        let config = LaunchConfig::builder()
            .mode(Mode::Run)
            .image("disk.qcow2")
            .tpm(true)
            .build()
            .unwrap();

        let ssh = config.with_mode(Mode::Ssh);

        assert_eq!(ssh.mode(), Mode::Ssh);
        assert_eq!(ssh.image(), os("disk.qcow2"));
        assert!(ssh.use_tpm());
        assert_eq!(config.mode(), Mode::Run);
    }

    #[cfg(unix)]
    #[test]
    fn test_paths_keep_non_utf8_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"/vm/\xe9.qcow2");
        let config = LaunchConfig::builder()
            .mode(Mode::Run)
            .image(raw)
            .build()
            .unwrap();

        assert_eq!(config.image(), Some(raw));
    }
}
