//! Per-provider model enumerations
//!
//! Each provider exposes a closed set of known model identifiers. Callers
//! may still hand us arbitrary model strings (vendors ship new models
//! faster than catalogs update); those are parsed here with
//! `FromStr`, and lookups degrade to provider defaults when parsing fails.

use std::str::FromStr;

/// Error returned when a model string does not match any known model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModel(pub String);

impl std::fmt::Display for UnknownModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown model: {}", self.0)
    }
}

impl std::error::Error for UnknownModel {}

macro_rules! model_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $id:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// All known models, in catalog order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The model identifier the vendor API expects
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $id,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownModel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($id => Ok($name::$variant),)+
                    other => Err(UnknownModel(other.to_string())),
                }
            }
        }
    };
}

model_enum! {
    /// Tongyi Wanxiang models
    TongyiModel {
        /// Text-to-video turbo, supports 480P and 720P
        T2vTurbo => "wanx2.1-t2v-turbo",
        /// Text-to-video plus, 720P only
        T2vPlus => "wanx2.1-t2v-plus",
        /// Image-to-video turbo, supports 480P and 720P
        I2vTurbo => "wanx2.1-i2v-turbo",
        /// Image-to-video plus, 720P only
        I2vPlus => "wanx2.1-i2v-plus",
        /// VACE plus, 720P only
        VacePlus => "wanx2.1-vace-plus",
    }
}

model_enum! {
    /// Vidu models
    ViduModel {
        /// Latest high-performance model
        Q1 => "viduq1",
        /// 2.0 release
        V2 => "vidu2.0",
        /// 1.5 release, widest resolution coverage
        V1_5 => "vidu1.5",
        /// 1.0 release, base resolution only
        V1 => "vidu1.0",
    }
}

model_enum! {
    /// Luma Dream Machine models
    LumaModel {
        /// Latest high-performance model
        Ray2Flash => "ray-flash-2",
        /// 2.0 release
        Ray2 => "ray-2",
        /// 1.6 release
        Ray1_6 => "ray-1-6",
    }
}

model_enum! {
    /// Runway models
    RunwayModel {
        /// Latest high-performance video model
        Gen4Turbo => "gen4_turbo",
        /// Image generation model
        Gen4Image => "gen4_image",
    }
}

model_enum! {
    /// SiliconFlow-hosted Wan-AI models
    SiliconFlowModel {
        /// Text-to-video standard model
        WanT2v14b => "Wan-AI/Wan2.1-T2V-14B",
        /// Text-to-video accelerated model
        WanT2v14bTurbo => "Wan-AI/Wan2.1-T2V-14B-Turbo",
        /// Image-to-video standard model
        WanI2v14b720p => "Wan-AI/Wan2.1-I2V-14B-720P",
        /// Image-to-video accelerated model
        WanI2v14b720pTurbo => "Wan-AI/Wan2.1-I2V-14B-720P-Turbo",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_id_round_trip() {
        for model in TongyiModel::ALL {
            assert_eq!(model.as_str().parse::<TongyiModel>().ok(), Some(*model));
        }
        for model in ViduModel::ALL {
            assert_eq!(model.as_str().parse::<ViduModel>().ok(), Some(*model));
        }
        for model in LumaModel::ALL {
            assert_eq!(model.as_str().parse::<LumaModel>().ok(), Some(*model));
        }
    }

    #[test]
    fn test_unknown_model_is_err() {
        let err = "wanx9.9-nonexistent".parse::<TongyiModel>().unwrap_err();
        assert_eq!(err.0, "wanx9.9-nonexistent");
    }

    #[test]
    fn test_vendor_identifiers() {
        assert_eq!(TongyiModel::T2vTurbo.as_str(), "wanx2.1-t2v-turbo");
        assert_eq!(ViduModel::V2.to_string(), "vidu2.0");
        assert_eq!(RunwayModel::Gen4Turbo.as_str(), "gen4_turbo");
        assert_eq!(
            SiliconFlowModel::WanI2v14b720p.as_str(),
            "Wan-AI/Wan2.1-I2V-14B-720P"
        );
    }
}
