//! NAS enumerations.

nas_enum! {
    /// Radio interface (access technology).
    pub enum RadioInterface: i8 {
        /// Unknown interface.
        Unknown = -1 => "unknown",
        /// No service.
        None = 0 => "none",
        /// CDMA2000 1x.
        Cdma1x = 1 => "cdma-1x",
        /// CDMA2000 HRPD (1xEV-DO).
        Cdma1xEvdo = 2 => "cdma-1xevdo",
        /// AMPS.
        Amps = 3 => "amps",
        /// GSM.
        Gsm = 4 => "gsm",
        /// UMTS.
        Umts = 5 => "umts",
        /// LTE.
        Lte = 8 => "lte",
        /// TD-SCDMA.
        TdScdma = 9 => "td-scdma",
        /// 5G NR.
        FiveGnr = 12 => "5gnr",
    }
}

nas_enum! {
    /// Network registration state.
    pub enum RegistrationState: u8 {
        /// Not registered and not searching.
        NotRegistered = 0 => "not-registered",
        /// Registered.
        Registered = 1 => "registered",
        /// Not registered, searching.
        NotRegisteredSearching = 2 => "not-registered-searching",
        /// Registration denied.
        RegistrationDenied = 3 => "registration-denied",
        /// Unknown.
        Unknown = 4 => "unknown",
    }
}

nas_enum! {
    /// Circuit/packet switched attach state.
    pub enum AttachState: u8 {
        /// Unknown.
        Unknown = 0 => "unknown",
        /// Attached.
        Attached = 1 => "attached",
        /// Detached.
        Detached = 2 => "detached",
    }
}

nas_enum! {
    /// Type of the selected network.
    pub enum NetworkType: u8 {
        /// Unknown.
        Unknown = 0 => "unknown",
        /// 3GPP2 network.
        ThreeGpp2 = 1 => "3gpp2",
        /// 3GPP network.
        ThreeGpp = 2 => "3gpp",
    }
}

nas_enum! {
    /// Roaming indicator.
    pub enum RoamingIndicatorStatus: u8 {
        /// Roaming.
        On = 0 => "on",
        /// Home.
        Off = 1 => "off",
    }
}

nas_enum! {
    /// Data service capability of the serving system.
    pub enum DataCapability: u8 {
        /// None.
        None = 0 => "none",
        /// GPRS.
        Gprs = 1 => "gprs",
        /// EDGE.
        Edge = 2 => "edge",
        /// HSDPA.
        Hsdpa = 3 => "hsdpa",
        /// HSUPA.
        Hsupa = 4 => "hsupa",
        /// WCDMA.
        Wcdma = 5 => "wcdma",
        /// CDMA.
        Cdma = 6 => "cdma",
        /// EV-DO revision 0.
        EvdoRev0 = 7 => "evdo-rev-0",
        /// EV-DO revision A.
        EvdoRevA = 8 => "evdo-rev-a",
        /// GSM.
        Gsm = 9 => "gsm",
        /// EV-DO revision B.
        EvdoRevB = 10 => "evdo-rev-b",
        /// LTE.
        Lte = 11 => "lte",
        /// HSDPA+.
        HsdpaPlus = 12 => "hsdpa-plus",
        /// Dual-carrier HSDPA+.
        DcHsdpaPlus = 13 => "dc-hsdpa-plus",
    }
}

nas_enum! {
    /// Service status.
    pub enum ServiceStatus: u8 {
        /// No service.
        None = 0 => "none",
        /// Limited service.
        Limited = 1 => "limited",
        /// Service available.
        Available = 2 => "available",
        /// Limited regional service.
        LimitedRegional = 3 => "limited-regional",
        /// Power save.
        PowerSave = 4 => "power-save",
    }
}

nas_enum! {
    /// Network service domain.
    pub enum NetworkServiceDomain: u8 {
        /// No service.
        None = 0 => "none",
        /// Circuit switched.
        Cs = 1 => "cs",
        /// Packet switched.
        Ps = 2 => "ps",
        /// Circuit and packet switched.
        CsPs = 3 => "cs-ps",
        /// Unknown.
        Unknown = 4 => "unknown",
    }
}

nas_enum! {
    /// HDR personality.
    pub enum HdrPersonality: u8 {
        /// Unknown.
        Unknown = 0 => "unknown",
        /// HRPD.
        Hrpd = 1 => "hrpd",
        /// eHRPD.
        Ehrpd = 2 => "ehrpd",
    }
}

nas_enum! {
    /// Call barring status.
    pub enum CallBarringStatus: i32 {
        /// Unknown.
        Unknown = -1 => "unknown",
        /// Normal calls only.
        NormalOnly = 0 => "normal-only",
        /// Emergency calls only.
        EmergencyOnly = 1 => "emergency-only",
        /// No calls allowed.
        NoCalls = 2 => "no-calls",
        /// All calls allowed.
        AllCalls = 3 => "all-calls",
    }
}

nas_enum! {
    /// How long a technology preference stays in effect.
    pub enum PreferenceDuration: u8 {
        /// Permanent.
        Permanent = 0 => "permanent",
        /// Until the next power cycle.
        PowerCycle = 1 => "power-cycle",
        /// Until the end of the next call.
        OneCall = 2 => "one-call",
        /// Until the end of the next call or a timer expires.
        OneCallOrTime = 3 => "one-call-or-time",
        /// Internal, one call (1).
        InternalOneCall1 = 4 => "internal-one-call-1",
        /// Internal, one call (2).
        InternalOneCall2 = 5 => "internal-one-call-2",
        /// Internal, one call (3).
        InternalOneCall3 = 6 => "internal-one-call-3",
    }
}

nas_enum! {
    /// CDMA PRL preference.
    pub enum CdmaPrlPreference: u16 {
        /// A-side only.
        ASideOnly = 0x0001 => "a-side-only",
        /// B-side only.
        BSideOnly = 0x0002 => "b-side-only",
        /// Any.
        Any = 0x3FFF => "any",
    }
}

nas_enum! {
    /// Roaming preference.
    pub enum RoamingPreference: u16 {
        /// Only non-roaming networks.
        Off = 0x01 => "off",
        /// Only roaming networks.
        NotOff = 0x02 => "not-off",
        /// Only non-roaming networks or roaming networks not flashing.
        NotFlashing = 0x03 => "not-flashing",
        /// Any network.
        Any = 0xFF => "any",
    }
}

nas_enum! {
    /// Network selection preference.
    pub enum NetworkSelectionPreference: u8 {
        /// Automatic selection.
        Automatic = 0 => "automatic",
        /// Manual selection.
        Manual = 1 => "manual",
    }
}

nas_enum! {
    /// Service domain preference.
    pub enum ServiceDomainPreference: u32 {
        /// Circuit switched only.
        CsOnly = 0 => "cs-only",
        /// Packet switched only.
        PsOnly = 1 => "ps-only",
        /// Circuit and packet switched.
        CsPs = 2 => "cs-ps",
        /// Packet switched attach.
        PsAttach = 3 => "ps-attach",
        /// Packet switched detach.
        PsDetach = 4 => "ps-detach",
    }
}

nas_enum! {
    /// GSM/WCDMA acquisition order preference.
    pub enum GsmWcdmaAcquisitionOrderPreference: u32 {
        /// Automatic.
        Automatic = 0 => "automatic",
        /// GSM first.
        Gsm = 1 => "gsm",
        /// WCDMA first.
        Wcdma = 2 => "wcdma",
    }
}
