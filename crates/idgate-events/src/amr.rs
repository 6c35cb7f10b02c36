//! Authentication Method Reference (AMR) enumerations.
//!
//! [`Amr`] is the full closed set of method references the platform can
//! report in an authentication context. [`AmrConstraint`] is the strict
//! subset a hook may demand through `Constraints::amr`. The asymmetry is
//! intentional: some references (device tokens, passkey/biometric
//! variants) are reportable facts but not demandable requirements.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use idgate_core::AppError;

/// A method reference describing how an authentication was performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Amr {
    /// Password was used.
    Pwd,
    /// A one-time password was used.
    Otp,
    /// An SMS-delivered code was used.
    Sms,
    /// Multiple factors were used.
    Mfa,
    /// Biometric verification.
    XBiometric,
    /// Passkey verification.
    XPasskey,
    /// Primary password authenticator.
    XPrimaryPassword,
    /// Primary out-of-band OTP over email.
    XPrimaryOobOtpEmail,
    /// Primary out-of-band OTP over SMS.
    XPrimaryOobOtpSms,
    /// Primary passkey authenticator.
    XPrimaryPasskey,
    /// Secondary password authenticator.
    XSecondaryPassword,
    /// Secondary out-of-band OTP over email.
    XSecondaryOobOtpEmail,
    /// Secondary out-of-band OTP over SMS.
    XSecondaryOobOtpSms,
    /// Secondary TOTP authenticator.
    XSecondaryTotp,
    /// A recovery code was accepted.
    XRecoveryCode,
    /// A remembered device token was accepted.
    XDeviceToken,
}

impl Amr {
    /// Return the reference as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pwd => "pwd",
            Self::Otp => "otp",
            Self::Sms => "sms",
            Self::Mfa => "mfa",
            Self::XBiometric => "x_biometric",
            Self::XPasskey => "x_passkey",
            Self::XPrimaryPassword => "x_primary_password",
            Self::XPrimaryOobOtpEmail => "x_primary_oob_otp_email",
            Self::XPrimaryOobOtpSms => "x_primary_oob_otp_sms",
            Self::XPrimaryPasskey => "x_primary_passkey",
            Self::XSecondaryPassword => "x_secondary_password",
            Self::XSecondaryOobOtpEmail => "x_secondary_oob_otp_email",
            Self::XSecondaryOobOtpSms => "x_secondary_oob_otp_sms",
            Self::XSecondaryTotp => "x_secondary_totp",
            Self::XRecoveryCode => "x_recovery_code",
            Self::XDeviceToken => "x_device_token",
        }
    }

    /// Whether a hook may demand this reference through a constraint.
    pub fn is_constrainable(&self) -> bool {
        AmrConstraint::try_from(*self).is_ok()
    }
}

impl fmt::Display for Amr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A method reference a hook may require the platform to satisfy.
///
/// Strict subset of [`Amr`]: `x_biometric`, `x_passkey`,
/// `x_primary_passkey` and `x_device_token` are reportable in context but
/// cannot be demanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmrConstraint {
    /// Require multiple factors.
    Mfa,
    /// Require a one-time password.
    Otp,
    /// Require a password.
    Pwd,
    /// Require an SMS-delivered code.
    Sms,
    /// Require primary out-of-band OTP over email.
    XPrimaryOobOtpEmail,
    /// Require primary out-of-band OTP over SMS.
    XPrimaryOobOtpSms,
    /// Require the primary password authenticator.
    XPrimaryPassword,
    /// Require a recovery code.
    XRecoveryCode,
    /// Require secondary out-of-band OTP over email.
    XSecondaryOobOtpEmail,
    /// Require secondary out-of-band OTP over SMS.
    XSecondaryOobOtpSms,
    /// Require the secondary password authenticator.
    XSecondaryPassword,
    /// Require the secondary TOTP authenticator.
    XSecondaryTotp,
}

impl AmrConstraint {
    /// Return the constraint as its wire string.
    pub fn as_str(&self) -> &'static str {
        Amr::from(*self).as_str()
    }
}

impl fmt::Display for AmrConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<AmrConstraint> for Amr {
    fn from(c: AmrConstraint) -> Self {
        match c {
            AmrConstraint::Mfa => Self::Mfa,
            AmrConstraint::Otp => Self::Otp,
            AmrConstraint::Pwd => Self::Pwd,
            AmrConstraint::Sms => Self::Sms,
            AmrConstraint::XPrimaryOobOtpEmail => Self::XPrimaryOobOtpEmail,
            AmrConstraint::XPrimaryOobOtpSms => Self::XPrimaryOobOtpSms,
            AmrConstraint::XPrimaryPassword => Self::XPrimaryPassword,
            AmrConstraint::XRecoveryCode => Self::XRecoveryCode,
            AmrConstraint::XSecondaryOobOtpEmail => Self::XSecondaryOobOtpEmail,
            AmrConstraint::XSecondaryOobOtpSms => Self::XSecondaryOobOtpSms,
            AmrConstraint::XSecondaryPassword => Self::XSecondaryPassword,
            AmrConstraint::XSecondaryTotp => Self::XSecondaryTotp,
        }
    }
}

impl TryFrom<Amr> for AmrConstraint {
    type Error = AppError;

    fn try_from(amr: Amr) -> Result<Self, Self::Error> {
        match amr {
            Amr::Mfa => Ok(Self::Mfa),
            Amr::Otp => Ok(Self::Otp),
            Amr::Pwd => Ok(Self::Pwd),
            Amr::Sms => Ok(Self::Sms),
            Amr::XPrimaryOobOtpEmail => Ok(Self::XPrimaryOobOtpEmail),
            Amr::XPrimaryOobOtpSms => Ok(Self::XPrimaryOobOtpSms),
            Amr::XPrimaryPassword => Ok(Self::XPrimaryPassword),
            Amr::XRecoveryCode => Ok(Self::XRecoveryCode),
            Amr::XSecondaryOobOtpEmail => Ok(Self::XSecondaryOobOtpEmail),
            Amr::XSecondaryOobOtpSms => Ok(Self::XSecondaryOobOtpSms),
            Amr::XSecondaryPassword => Ok(Self::XSecondaryPassword),
            Amr::XSecondaryTotp => Ok(Self::XSecondaryTotp),
            Amr::XBiometric | Amr::XPasskey | Amr::XPrimaryPasskey | Amr::XDeviceToken => {
                Err(AppError::validation(format!(
                    "AMR '{amr}' cannot be used as a constraint"
                )))
            }
        }
    }
}

impl FromStr for Amr {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pwd" => Ok(Self::Pwd),
            "otp" => Ok(Self::Otp),
            "sms" => Ok(Self::Sms),
            "mfa" => Ok(Self::Mfa),
            "x_biometric" => Ok(Self::XBiometric),
            "x_passkey" => Ok(Self::XPasskey),
            "x_primary_password" => Ok(Self::XPrimaryPassword),
            "x_primary_oob_otp_email" => Ok(Self::XPrimaryOobOtpEmail),
            "x_primary_oob_otp_sms" => Ok(Self::XPrimaryOobOtpSms),
            "x_primary_passkey" => Ok(Self::XPrimaryPasskey),
            "x_secondary_password" => Ok(Self::XSecondaryPassword),
            "x_secondary_oob_otp_email" => Ok(Self::XSecondaryOobOtpEmail),
            "x_secondary_oob_otp_sms" => Ok(Self::XSecondaryOobOtpSms),
            "x_secondary_totp" => Ok(Self::XSecondaryTotp),
            "x_recovery_code" => Ok(Self::XRecoveryCode),
            "x_device_token" => Ok(Self::XDeviceToken),
            _ => Err(AppError::validation(format!(
                "Invalid AMR value: '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CONSTRAINTS: [AmrConstraint; 12] = [
        AmrConstraint::Mfa,
        AmrConstraint::Otp,
        AmrConstraint::Pwd,
        AmrConstraint::Sms,
        AmrConstraint::XPrimaryOobOtpEmail,
        AmrConstraint::XPrimaryOobOtpSms,
        AmrConstraint::XPrimaryPassword,
        AmrConstraint::XRecoveryCode,
        AmrConstraint::XSecondaryOobOtpEmail,
        AmrConstraint::XSecondaryOobOtpSms,
        AmrConstraint::XSecondaryPassword,
        AmrConstraint::XSecondaryTotp,
    ];

    #[test]
    fn test_every_constraint_is_an_amr() {
        for c in ALL_CONSTRAINTS {
            let amr = Amr::from(c);
            assert_eq!(amr.as_str(), c.as_str());
            assert!(amr.is_constrainable());
        }
    }

    #[test]
    fn test_constraint_subset_is_strict() {
        for amr in [
            Amr::XDeviceToken,
            Amr::XBiometric,
            Amr::XPasskey,
            Amr::XPrimaryPasskey,
        ] {
            assert!(!amr.is_constrainable());
            assert!(AmrConstraint::try_from(amr).is_err());
        }
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&Amr::XPrimaryOobOtpEmail).unwrap(),
            "\"x_primary_oob_otp_email\""
        );
        assert_eq!(
            serde_json::from_str::<AmrConstraint>("\"x_secondary_totp\"").unwrap(),
            AmrConstraint::XSecondaryTotp
        );
        assert!(serde_json::from_str::<AmrConstraint>("\"x_device_token\"").is_err());
    }

    #[test]
    fn test_from_str_round_trip() {
        let amr: Amr = "x_recovery_code".parse().unwrap();
        assert_eq!(amr, Amr::XRecoveryCode);
        assert!("face_id".parse::<Amr>().is_err());
    }
}
