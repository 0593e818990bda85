// file: src/qemu/firmware.rs
// version: 1.0.0
// guid: 66566f53-0bf2-4abc-9537-30c13499c1cf

//! UEFI secure boot and TPM emulation segments

/// OVMF firmware code with secure boot support, mounted read-only
pub const SECURE_BOOT_CODE: &str = "/usr/share/OVMF/OVMF_CODE_4M.secboot.fd";

/// OVMF variable store with enrolled Microsoft keys, mounted read-write
pub const SECURE_BOOT_VARS: &str = "/usr/share/OVMF/OVMF_VARS_4M.ms.fd";

/// Control socket of a locally running `swtpm socket` emulator
pub const TPM_SOCKET: &str = "/tmp/emulated_tpm/swtpm-sock";

/// pflash drives, SMM machine type and the secure pflash property
pub fn secure_boot_args() -> Vec<String> {
    vec![
        "-drive".to_string(),
        format!("if=pflash,format=raw,readonly=on,file={}", SECURE_BOOT_CODE),
        "-drive".to_string(),
        format!("if=pflash,format=raw,file={}", SECURE_BOOT_VARS),
        "-machine".to_string(),
        "q35,smm=on".to_string(),
        "-global".to_string(),
        "driver=cfi.pflash01,property=secure,value=on".to_string(),
    ]
}

/// Socket chardev, emulator backend and TIS device
pub fn tpm_args() -> Vec<String> {
    vec![
        "-chardev".to_string(),
        format!("socket,id=chrtpm,path={}", TPM_SOCKET),
        "-tpmdev".to_string(),
        "emulator,id=tpm0,chardev=chrtpm".to_string(),
        "-device".to_string(),
        "tpm-tis,tpmdev=tpm0".to_string(),
    ]
}

/// Combined block, secure boot first
pub fn firmware_args(secure_boot: bool, tpm: bool) -> Vec<String> {
    let mut args = Vec::new();
    if secure_boot {
        args.extend(secure_boot_args());
    }
    if tpm {
        args.extend(tpm_args());
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_boot_code_is_read_only_and_vars_writable() {
        let args = secure_boot_args();

        assert_eq!(args.iter().filter(|a| a.starts_with("if=pflash")).count(), 2);
        assert!(args[1].contains("readonly=on"));
        assert!(args[1].ends_with(SECURE_BOOT_CODE));
        assert!(!args[3].contains("readonly"));
        assert!(args[3].ends_with(SECURE_BOOT_VARS));
        assert!(args.contains(&"q35,smm=on".to_string()));
    }

    #[test]
    fn test_tpm_chardev_is_referenced_by_backend() {
        let args = tpm_args();

        assert_eq!(args[0], "-chardev");
        assert!(args[1].contains("id=chrtpm"));
        assert!(args[3].contains("chardev=chrtpm"));
        assert!(args[5].contains("tpmdev=tpm0"));
    }

    #[test]
    fn test_firmware_args_order_and_empty() {
        assert!(firmware_args(false, false).is_empty());
        assert_eq!(firmware_args(true, false), secure_boot_args());
        assert_eq!(firmware_args(false, true), tpm_args());

        let both = firmware_args(true, true);
        let pflash = both.iter().position(|a| a.contains("pflash")).unwrap();
        let chardev = both.iter().position(|a| a == "-chardev").unwrap();
        assert!(pflash < chardev);
    }
}
