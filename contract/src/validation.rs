//! Bootstrap metadata validation.
//!
//! `Chaincode::new` refuses to start with metadata that would make the
//! contract unaddressable or its metadata document ambiguous.

use crate::chaincode::SYSTEM_NAMESPACE;
use crate::error::ChaincodeError;
use crate::metadata::{ChaincodeInfo, ContractInfo};

/// Validate the contract section of the metadata.
///
/// Checks:
/// - `name` is non-empty, contains no `:`, and is not the system namespace
/// - `version` is non-empty
/// - a license, if given, has a name
pub fn validate_contract_info(info: &ContractInfo) -> Result<(), ChaincodeError> {
    if info.name.is_empty() {
        return Err(ChaincodeError::InvalidInfo(
            "contract name must be non-empty".into(),
        ));
    }
    if info.name.contains(':') {
        return Err(ChaincodeError::InvalidInfo(format!(
            "contract name {:?} must not contain ':'",
            info.name
        )));
    }
    if info.name == SYSTEM_NAMESPACE {
        return Err(ChaincodeError::InvalidInfo(format!(
            "contract name {:?} is reserved",
            info.name
        )));
    }
    if info.version.is_empty() {
        return Err(ChaincodeError::InvalidInfo(
            "contract version must be non-empty".into(),
        ));
    }
    if let Some(license) = &info.license {
        if license.name.is_empty() {
            return Err(ChaincodeError::InvalidInfo(
                "license name must be non-empty".into(),
            ));
        }
    }
    Ok(())
}

/// Validate the full chaincode metadata.
pub fn validate_info(info: &ChaincodeInfo) -> Result<(), ChaincodeError> {
    if info.title.is_empty() {
        return Err(ChaincodeError::InvalidInfo(
            "chaincode title must be non-empty".into(),
        ));
    }
    if info.version.is_empty() {
        return Err(ChaincodeError::InvalidInfo(
            "chaincode version must be non-empty".into(),
        ));
    }
    validate_contract_info(&info.contract)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::LicenseInfo;

    #[test]
    fn test_default_info_is_valid() {
        assert!(validate_info(&ChaincodeInfo::default()).is_ok());
    }

    #[test]
    fn test_empty_title() {
        let mut info = ChaincodeInfo::default();
        info.title.clear();
        let err = validate_info(&info).unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_empty_version() {
        let mut info = ChaincodeInfo::default();
        info.version.clear();
        assert!(validate_info(&info).is_err());

        let mut info = ChaincodeInfo::default();
        info.contract.version.clear();
        assert!(validate_info(&info).is_err());
    }

    #[test]
    fn test_contract_name_rules() {
        let mut info = ContractInfo::default();
        info.name = String::new();
        assert!(validate_contract_info(&info).is_err());

        info.name = "Record:Contract".into();
        assert!(validate_contract_info(&info).is_err());

        info.name = SYSTEM_NAMESPACE.into();
        assert!(validate_contract_info(&info).is_err());

        info.name = "AssetContract".into();
        assert!(validate_contract_info(&info).is_ok());
    }

    #[test]
    fn test_license_name_required() {
        let mut info = ContractInfo::default();
        info.license = Some(LicenseInfo {
            name: String::new(),
            url: None,
        });
        assert!(matches!(
            validate_contract_info(&info),
            Err(ChaincodeError::InvalidInfo(_))
        ));

        info.license = None;
        assert!(validate_contract_info(&info).is_ok());
    }
}
