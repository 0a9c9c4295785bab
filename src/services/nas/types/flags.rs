//! NAS bitmask types.

nas_flags! {
    /// Sub-measurements requested by a signal strength query.
    pub struct SignalStrengthRequest: u16, empty = "none" {
        /// Received signal strength indication.
        const RSSI = 1 << 0 => "rssi";
        /// Energy per chip over interference.
        const ECIO = 1 << 1 => "ecio";
        /// Received IO.
        const IO = 1 << 2 => "io";
        /// Signal to interference plus noise ratio.
        const SINR = 1 << 3 => "sinr";
        /// Frame/bit error rates.
        const ERROR_RATE = 1 << 4 => "error-rate";
        /// Reference signal received quality.
        const RSRQ = 1 << 5 => "rsrq";
        /// LTE signal to noise ratio.
        const LTE_SNR = 1 << 6 => "lte-snr";
        /// LTE reference signal received power.
        const LTE_RSRP = 1 << 7 => "lte-rsrp";
    }
}

impl SignalStrengthRequest {
    /// Every measurement the signal strength report knows how to render.
    pub fn reported() -> Self {
        Self::RSSI
            | Self::ECIO
            | Self::IO
            | Self::SINR
            | Self::RSRQ
            | Self::LTE_SNR
            | Self::LTE_RSRP
    }
}

nas_flags! {
    /// Radio technology preference mask.
    pub struct RadioTechnologyPreference: u16, empty = "automatic" {
        /// 3GPP2 technologies.
        const TECH_3GPP2 = 1 << 0 => "3gpp2";
        /// 3GPP technologies.
        const TECH_3GPP = 1 << 1 => "3gpp";
        /// Analog service.
        const ANALOG = 1 << 2 => "analog";
        /// Digital service.
        const DIGITAL = 1 << 3 => "digital";
        /// HDR.
        const HDR = 1 << 4 => "hdr";
        /// LTE.
        const LTE = 1 << 5 => "lte";
    }
}

nas_flags! {
    /// Radio access technology mode preference.
    pub struct RatModePreference: u16, empty = "none" {
        /// CDMA2000 1x.
        const CDMA_1X = 1 << 0 => "cdma-1x";
        /// CDMA2000 HRPD (1xEV-DO).
        const CDMA_1XEVDO = 1 << 1 => "cdma-1xevdo";
        /// GSM.
        const GSM = 1 << 2 => "gsm";
        /// UMTS.
        const UMTS = 1 << 3 => "umts";
        /// LTE.
        const LTE = 1 << 4 => "lte";
        /// TD-SCDMA.
        const TD_SCDMA = 1 << 5 => "td-scdma";
    }
}

nas_flags! {
    /// CDMA/GSM/WCDMA band preference.
    pub struct BandPreference: u64, empty = "none" {
        /// Band class 0, A-system.
        const BC_0_A_SYSTEM = 1 << 0 => "bc-0-a-system";
        /// Band class 0, B-system.
        const BC_0_B_SYSTEM = 1 << 1 => "bc-0-b-system";
        /// Band class 1, all blocks.
        const BC_1_ALL_BLOCKS = 1 << 2 => "bc-1-all-blocks";
        /// Band class 2.
        const BC_2 = 1 << 3 => "bc-2";
        /// Band class 3, A-system.
        const BC_3_A_SYSTEM = 1 << 4 => "bc-3-a-system";
        /// Band class 4, all blocks.
        const BC_4_ALL_BLOCKS = 1 << 5 => "bc-4-all-blocks";
        /// Band class 5, all blocks.
        const BC_5_ALL_BLOCKS = 1 << 6 => "bc-5-all-blocks";
        /// GSM DCS 1800.
        const GSM_DCS_1800 = 1 << 7 => "gsm-dcs-1800";
        /// GSM extended 900.
        const GSM_EGSM_900 = 1 << 8 => "gsm-egsm-900";
        /// GSM primary 900.
        const GSM_PRIMARY_900 = 1 << 9 => "gsm-primary-900";
        /// Band class 6.
        const BC_6 = 1 << 10 => "bc-6";
        /// Band class 7.
        const BC_7 = 1 << 11 => "bc-7";
        /// Band class 8.
        const BC_8 = 1 << 12 => "bc-8";
        /// Band class 9.
        const BC_9 = 1 << 13 => "bc-9";
        /// Band class 10.
        const BC_10 = 1 << 14 => "bc-10";
        /// Band class 11.
        const BC_11 = 1 << 15 => "bc-11";
        /// GSM 450.
        const GSM_450 = 1 << 16 => "gsm-450";
        /// GSM 480.
        const GSM_480 = 1 << 17 => "gsm-480";
        /// GSM 750.
        const GSM_750 = 1 << 18 => "gsm-750";
        /// GSM 850.
        const GSM_850 = 1 << 19 => "gsm-850";
        /// GSM railways 900.
        const GSM_RAILWAYS_900 = 1 << 20 => "gsm-railways-900";
        /// GSM PCS 1900.
        const GSM_PCS_1900 = 1 << 21 => "gsm-pcs-1900";
        /// WCDMA 2100.
        const WCDMA_2100 = 1 << 22 => "wcdma-2100";
        /// WCDMA PCS 1900.
        const WCDMA_PCS_1900 = 1 << 23 => "wcdma-pcs-1900";
        /// WCDMA DCS 1800.
        const WCDMA_DCS_1800 = 1 << 24 => "wcdma-dcs-1800";
        /// WCDMA 1700 (US).
        const WCDMA_1700_US = 1 << 25 => "wcdma-1700-us";
        /// WCDMA 850 (US).
        const WCDMA_850_US = 1 << 26 => "wcdma-850-us";
        /// WCDMA 800.
        const WCDMA_800 = 1 << 27 => "wcdma-800";
        /// Band class 12.
        const BC_12 = 1 << 28 => "bc-12";
        /// Band class 14.
        const BC_14 = 1 << 29 => "bc-14";
        /// Band class 15.
        const BC_15 = 1 << 31 => "bc-15";
        /// WCDMA 2600.
        const WCDMA_2600 = 1 << 48 => "wcdma-2600";
        /// WCDMA 900.
        const WCDMA_900 = 1 << 49 => "wcdma-900";
        /// WCDMA 1700 (Japan).
        const WCDMA_1700_JAPAN = 1 << 50 => "wcdma-1700-japan";
        /// Band class 16.
        const BC_16 = 1 << 56 => "bc-16";
        /// Band class 17.
        const BC_17 = 1 << 57 => "bc-17";
        /// Band class 18.
        const BC_18 = 1 << 58 => "bc-18";
        /// Band class 19.
        const BC_19 = 1 << 59 => "bc-19";
    }
}

nas_flags! {
    /// LTE (E-UTRAN) band preference.
    pub struct LteBandPreference: u64, empty = "none" {
        /// E-UTRAN band 1.
        const EUTRAN_1 = 1 << 0 => "eutran-1";
        /// E-UTRAN band 2.
        const EUTRAN_2 = 1 << 1 => "eutran-2";
        /// E-UTRAN band 3.
        const EUTRAN_3 = 1 << 2 => "eutran-3";
        /// E-UTRAN band 4.
        const EUTRAN_4 = 1 << 3 => "eutran-4";
        /// E-UTRAN band 5.
        const EUTRAN_5 = 1 << 4 => "eutran-5";
        /// E-UTRAN band 6.
        const EUTRAN_6 = 1 << 5 => "eutran-6";
        /// E-UTRAN band 7.
        const EUTRAN_7 = 1 << 6 => "eutran-7";
        /// E-UTRAN band 8.
        const EUTRAN_8 = 1 << 7 => "eutran-8";
        /// E-UTRAN band 9.
        const EUTRAN_9 = 1 << 8 => "eutran-9";
        /// E-UTRAN band 10.
        const EUTRAN_10 = 1 << 9 => "eutran-10";
        /// E-UTRAN band 11.
        const EUTRAN_11 = 1 << 10 => "eutran-11";
        /// E-UTRAN band 12.
        const EUTRAN_12 = 1 << 11 => "eutran-12";
        /// E-UTRAN band 13.
        const EUTRAN_13 = 1 << 12 => "eutran-13";
        /// E-UTRAN band 14.
        const EUTRAN_14 = 1 << 13 => "eutran-14";
        /// E-UTRAN band 17.
        const EUTRAN_17 = 1 << 16 => "eutran-17";
        /// E-UTRAN band 18.
        const EUTRAN_18 = 1 << 17 => "eutran-18";
        /// E-UTRAN band 19.
        const EUTRAN_19 = 1 << 18 => "eutran-19";
        /// E-UTRAN band 20.
        const EUTRAN_20 = 1 << 19 => "eutran-20";
        /// E-UTRAN band 21.
        const EUTRAN_21 = 1 << 20 => "eutran-21";
        /// E-UTRAN band 24.
        const EUTRAN_24 = 1 << 23 => "eutran-24";
        /// E-UTRAN band 25.
        const EUTRAN_25 = 1 << 24 => "eutran-25";
        /// E-UTRAN band 33.
        const EUTRAN_33 = 1 << 32 => "eutran-33";
        /// E-UTRAN band 34.
        const EUTRAN_34 = 1 << 33 => "eutran-34";
        /// E-UTRAN band 35.
        const EUTRAN_35 = 1 << 34 => "eutran-35";
        /// E-UTRAN band 36.
        const EUTRAN_36 = 1 << 35 => "eutran-36";
        /// E-UTRAN band 37.
        const EUTRAN_37 = 1 << 36 => "eutran-37";
        /// E-UTRAN band 38.
        const EUTRAN_38 = 1 << 37 => "eutran-38";
        /// E-UTRAN band 39.
        const EUTRAN_39 = 1 << 38 => "eutran-39";
        /// E-UTRAN band 40.
        const EUTRAN_40 = 1 << 39 => "eutran-40";
        /// E-UTRAN band 41.
        const EUTRAN_41 = 1 << 40 => "eutran-41";
        /// E-UTRAN band 42.
        const EUTRAN_42 = 1 << 41 => "eutran-42";
        /// E-UTRAN band 43.
        const EUTRAN_43 = 1 << 42 => "eutran-43";
    }
}

nas_flags! {
    /// TD-SCDMA band preference.
    pub struct TdScdmaBandPreference: u64, empty = "none" {
        /// Band A.
        const A = 1 << 0 => "a";
        /// Band B.
        const B = 1 << 1 => "b";
        /// Band C.
        const C = 1 << 2 => "c";
        /// Band D.
        const D = 1 << 3 => "d";
        /// Band E.
        const E = 1 << 4 => "e";
        /// Band F.
        const F = 1 << 5 => "f";
    }
}

nas_flags! {
    /// Status of a network found by a scan.
    pub struct NetworkStatus: u8, empty = "none" {
        /// Network is currently serving.
        const CURRENT_SERVING = 1 << 0 => "current-serving";
        /// Network is available.
        const AVAILABLE = 1 << 1 => "available";
        /// Home network.
        const HOME = 1 << 2 => "home";
        /// Roaming network.
        const ROAMING = 1 << 3 => "roaming";
        /// Forbidden network.
        const FORBIDDEN = 1 << 4 => "forbidden";
        /// Not forbidden network.
        const NOT_FORBIDDEN = 1 << 5 => "not-forbidden";
        /// Preferred network.
        const PREFERRED = 1 << 6 => "preferred";
        /// Not preferred network.
        const NOT_PREFERRED = 1 << 7 => "not-preferred";
    }
}
