use fido_types::{CapabilityMap, OptionValue};
use serde::{Deserialize, Serialize};
use typeshare::typeshare;

const CLIENT_PIN: &str = "clientPin";
const CRED_MGMT: &str = "credMgmt";
const CREDENTIAL_MGMT_PREVIEW: &str = "credentialMgmtPreview";
const BIO_ENROLL: &str = "bioEnroll";
const ALWAYS_UV: &str = "alwaysUv";

/// The capability flags of an authenticator that drive which management features are offered.
///
/// Apart from [`Self::bio_enroll`], an option that is absent from the authenticator's option map
/// is reported as `false`: for these flags "not supported" and "not present" are handled alike.
#[typeshare]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// The authenticator accepts a PIN from the client and a PIN has been set.
    pub client_pin: bool,

    /// The authenticator supports the authenticatorCredentialManagement command.
    pub cred_mgmt: bool,

    /// The authenticator supports the "FIDO_2_1_PRE" prototype credential management command.
    pub credential_mgmt_preview: bool,

    /// If bioEnroll is:
    ///
    /// `Some(true)`, the authenticator supports the authenticatorBioEnrollment commands,
    ///  and has at least one bio enrollment presently provisioned.
    ///
    /// `Some(false)`, the authenticator supports the authenticatorBioEnrollment commands,
    /// and does not yet have any bio enrollments provisioned.
    ///
    /// `None`, the authenticatorBioEnrollment commands are NOT supported.
    pub bio_enroll: Option<bool>,

    /// The authenticator requires user verification for every operation.
    pub always_uv: bool,
}

impl Options {
    /// Decode the options from an authenticator's untyped option map.
    ///
    /// This never fails. A key holding something other than a boolean is treated as if it was
    /// absent.
    pub fn from_capabilities<M>(options: &M) -> Self
    where
        M: CapabilityMap + ?Sized,
    {
        Self {
            client_pin: flag(options, CLIENT_PIN),
            cred_mgmt: flag(options, CRED_MGMT),
            credential_mgmt_preview: flag(options, CREDENTIAL_MGMT_PREVIEW),
            bio_enroll: optional_flag(options, BIO_ENROLL),
            always_uv: flag(options, ALWAYS_UV),
        }
    }

    /// Whether credentials can be managed, through either the final or the prototype command.
    pub fn supports_cred_mgmt(&self) -> bool {
        self.cred_mgmt || self.credential_mgmt_preview
    }

    /// Whether the authenticator supports biometric enrollment at all.
    pub fn supports_bio_enroll(&self) -> bool {
        self.bio_enroll.is_some()
    }
}

fn flag<M>(options: &M, key: &str) -> bool
where
    M: CapabilityMap + ?Sized,
{
    optional_flag(options, key).unwrap_or(false)
}

fn optional_flag<M>(options: &M, key: &str) -> Option<bool>
where
    M: CapabilityMap + ?Sized,
{
    let value = options.get(key)?.as_bool();
    if value.is_none() {
        log::warn!("Option {key} does not hold a boolean, treating it as absent");
    }
    value
}
