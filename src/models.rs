//! Unified model constants across providers.
//!
//! Convenience constants so callers can reference specific models without
//! hardcoding vendor id strings. The authoritative enumerations live in
//! [`crate::types::models`]; these constants mirror them.

/// Tongyi Wanxiang models
pub mod tongyi {
    use crate::types::models::TongyiModel;

    /// Text-to-video turbo (480P and 720P)
    pub const T2V_TURBO: &str = TongyiModel::T2vTurbo.as_str();
    /// Text-to-video plus (720P only)
    pub const T2V_PLUS: &str = TongyiModel::T2vPlus.as_str();
    /// Image-to-video turbo (480P and 720P)
    pub const I2V_TURBO: &str = TongyiModel::I2vTurbo.as_str();
    /// Image-to-video plus (720P only)
    pub const I2V_PLUS: &str = TongyiModel::I2vPlus.as_str();
    /// VACE plus (720P only)
    pub const VACE_PLUS: &str = TongyiModel::VacePlus.as_str();
}

/// Vidu models
pub mod vidu {
    use crate::types::models::ViduModel;

    /// Latest high-performance model
    pub const VIDU_Q1: &str = ViduModel::Q1.as_str();
    /// 2.0 release
    pub const VIDU_2_0: &str = ViduModel::V2.as_str();
    /// 1.5 release
    pub const VIDU_1_5: &str = ViduModel::V1_5.as_str();
    /// 1.0 release
    pub const VIDU_1_0: &str = ViduModel::V1.as_str();
}

/// Luma Dream Machine models
pub mod luma {
    use crate::types::models::LumaModel;

    /// Latest high-performance model
    pub const RAY_2_FLASH: &str = LumaModel::Ray2Flash.as_str();
    /// 2.0 release
    pub const RAY_2: &str = LumaModel::Ray2.as_str();
    /// 1.6 release
    pub const RAY_1_6: &str = LumaModel::Ray1_6.as_str();
}

/// Runway models
pub mod runway {
    use crate::types::models::RunwayModel;

    /// Latest high-performance video model
    pub const GEN4_TURBO: &str = RunwayModel::Gen4Turbo.as_str();
    /// Image generation model
    pub const GEN4_IMAGE: &str = RunwayModel::Gen4Image.as_str();
}

/// SiliconFlow-hosted Wan-AI models
pub mod siliconflow {
    use crate::types::models::SiliconFlowModel;

    /// Text-to-video standard model
    pub const WAN_T2V_14B: &str = SiliconFlowModel::WanT2v14b.as_str();
    /// Text-to-video accelerated model
    pub const WAN_T2V_14B_TURBO: &str = SiliconFlowModel::WanT2v14bTurbo.as_str();
    /// Image-to-video standard model
    pub const WAN_I2V_14B_720P: &str = SiliconFlowModel::WanI2v14b720p.as_str();
    /// Image-to-video accelerated model
    pub const WAN_I2V_14B_720P_TURBO: &str = SiliconFlowModel::WanI2v14b720pTurbo.as_str();
}

/// Zhipu AI models
pub mod zhipu {
    /// CogVideoX video generation model
    pub const COGVIDEOX: &str = "cogvideox";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_track_the_model_enums() {
        assert_eq!(tongyi::T2V_TURBO, "wanx2.1-t2v-turbo");
        assert_eq!(tongyi::VACE_PLUS, "wanx2.1-vace-plus");
        assert_eq!(vidu::VIDU_2_0, "vidu2.0");
        assert_eq!(luma::RAY_2_FLASH, "ray-flash-2");
        assert_eq!(runway::GEN4_TURBO, "gen4_turbo");
        assert_eq!(siliconflow::WAN_I2V_14B_720P_TURBO, "Wan-AI/Wan2.1-I2V-14B-720P-Turbo");
        assert_eq!(zhipu::COGVIDEOX, "cogvideox");
    }
}
