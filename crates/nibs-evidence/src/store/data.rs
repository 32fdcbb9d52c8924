//! Bundled evidence table.
//!
//! Compiled from peer-reviewed meta-analyses, systematic reviews and RCTs
//! published through 2024. Values are display text and are never parsed.

use crate::domain::{DisorderId, DisorderRecord, ModalityId, ModalityRecord};

static DEPRESSION_MODALITIES: [(ModalityId, ModalityRecord); 3] = [
    (
        ModalityId::Rtms,
        ModalityRecord {
            name: "rTMS (Repetitive Transcranial Magnetic Stimulation)",
            efficacy: "High",
            effect_size: "0.50-0.70",
            fda_approved: true,
            evidence_level: "Level 1A",
            response_rate: "50-60%",
            remission_rate: "30-40%",
            sessions: "20-36 sessions",
            protocol: "10 Hz left DLPFC or 1 Hz right DLPFC",
            frequency: "Daily sessions, 5 days/week",
            references: "Brunoni et al., 2017; Mutz et al., 2019",
            contraindications: &[
                "Metallic implants in head",
                "History of seizures",
                "Cochlear implants",
            ],
            notes:
                "FDA cleared for treatment-resistant depression since 2008. Strong evidence base with multiple RCTs.",
        },
    ),
    (
        ModalityId::Tbs,
        ModalityRecord {
            name: "Theta Burst Stimulation",
            efficacy: "High",
            effect_size: "0.45-0.65",
            fda_approved: true,
            evidence_level: "Level 1A",
            response_rate: "45-55%",
            remission_rate: "28-35%",
            sessions: "20-30 sessions",
            protocol: "iTBS left DLPFC (600 pulses, 3 min)",
            frequency: "Daily, 5 days/week",
            references: "Blumberger et al., 2018; Li et al., 2014",
            contraindications: &["Same as rTMS"],
            notes: "Shorter treatment duration (3 min vs 37 min). Non-inferior to standard rTMS.",
        },
    ),
    (
        ModalityId::Tdcs,
        ModalityRecord {
            name: "tDCS (Transcranial Direct Current Stimulation)",
            efficacy: "Moderate",
            effect_size: "0.35-0.45",
            fda_approved: false,
            evidence_level: "Level 1B",
            response_rate: "35-45%",
            remission_rate: "20-30%",
            sessions: "10-20 sessions",
            protocol: "Anode left DLPFC, Cathode right supraorbital (2 mA, 20-30 min)",
            frequency: "Daily or every other day",
            references: "Brunoni et al., 2016; Moffa et al., 2020",
            contraindications: &["Skin lesions at electrode sites", "Metallic cranial implants"],
            notes:
                "More accessible and portable. Lower cost. Evidence mixed but promising for augmentation.",
        },
    ),
];

static OCD_MODALITIES: [(ModalityId, ModalityRecord); 2] = [
    (
        ModalityId::Rtms,
        ModalityRecord {
            name: "rTMS (Repetitive Transcranial Magnetic Stimulation)",
            efficacy: "Moderate-High",
            effect_size: "0.50-0.65",
            fda_approved: true,
            evidence_level: "Level 1A",
            response_rate: "40-50%",
            remission_rate: "25-35%",
            sessions: "20-30 sessions",
            protocol:
                "Low frequency (1 Hz) to supplementary motor area (SMA) or high frequency (10 Hz) to DLPFC",
            frequency: "Daily, 5 days/week",
            references: "Carmi et al., 2019; Berlim et al., 2013",
            contraindications: &["Standard TMS contraindications"],
            notes:
                "FDA cleared for OCD in 2018. Deep TMS shows stronger effects than standard figure-8 coil.",
        },
    ),
    (
        ModalityId::Tdcs,
        ModalityRecord {
            name: "tDCS (Transcranial Direct Current Stimulation)",
            efficacy: "Low-Moderate",
            effect_size: "0.25-0.40",
            fda_approved: false,
            evidence_level: "Level 2",
            response_rate: "30-40%",
            remission_rate: "15-25%",
            sessions: "10-20 sessions",
            protocol: "Cathode over pre-SMA or orbitofrontal cortex (2 mA, 20 min)",
            frequency: "Daily or alternate days",
            references: "Bation et al., 2019; Najafi et al., 2020",
            contraindications: &["Standard tDCS contraindications"],
            notes: "Emerging evidence. May work better as augmentation to CBT/ERP therapy.",
        },
    ),
];

static STROKE_MODALITIES: [(ModalityId, ModalityRecord); 2] = [
    (
        ModalityId::Rtms,
        ModalityRecord {
            name: "rTMS (Repetitive Transcranial Magnetic Stimulation)",
            efficacy: "Moderate",
            effect_size: "0.35-0.55",
            fda_approved: false,
            evidence_level: "Level 1B",
            response_rate: "Variable (40-60% show improvement)",
            remission_rate: "N/A",
            sessions: "10-20 sessions",
            protocol:
                "Low frequency (1 Hz) to contralesional M1 or high frequency (10 Hz) to ipsilesional M1",
            frequency: "Daily combined with physical therapy",
            references: "Zhang et al., 2017; Lefaucheur et al., 2020",
            contraindications: &["Recent hemorrhagic stroke", "Uncontrolled seizures"],
            notes:
                "Best results when combined with motor training. More effective in subacute phase (<6 months post-stroke).",
        },
    ),
    (
        ModalityId::Tdcs,
        ModalityRecord {
            name: "tDCS (Transcranial Direct Current Stimulation)",
            efficacy: "Moderate",
            effect_size: "0.30-0.50",
            fda_approved: false,
            evidence_level: "Level 1B",
            response_rate: "45-55% show improvement",
            remission_rate: "N/A",
            sessions: "10-20 sessions",
            protocol: "Anode over ipsilesional M1 (2 mA, 20 min) during motor practice",
            frequency: "Daily with concurrent motor training",
            references: "Elsner et al., 2016; Bornheim et al., 2020",
            contraindications: &["Scalp lesions", "Metal in skull"],
            notes:
                "Cost-effective option. Best results when paired with task-specific training. Home-based protocols being developed.",
        },
    ),
];

static CHRONIC_PAIN_MODALITIES: [(ModalityId, ModalityRecord); 2] = [
    (
        ModalityId::Rtms,
        ModalityRecord {
            name: "rTMS (Repetitive Transcranial Magnetic Stimulation)",
            efficacy: "Moderate",
            effect_size: "0.40-0.55",
            fda_approved: false,
            evidence_level: "Level 1B",
            response_rate: "40-50%",
            remission_rate: "20-30%",
            sessions: "10-20 sessions, maintenance may be needed",
            protocol: "High frequency (10 Hz) to M1 contralateral to pain or DLPFC",
            frequency: "Daily for 2-4 weeks, then maintenance",
            references: "O'Connell et al., 2018; Leung et al., 2020",
            contraindications: &["Standard TMS contraindications"],
            notes:
                "M1 stimulation shows best results for neuropathic pain. Effects may require maintenance sessions.",
        },
    ),
    (
        ModalityId::Tdcs,
        ModalityRecord {
            name: "tDCS (Transcranial Direct Current Stimulation)",
            efficacy: "Low-Moderate",
            effect_size: "0.25-0.40",
            fda_approved: false,
            evidence_level: "Level 2",
            response_rate: "35-45%",
            remission_rate: "15-25%",
            sessions: "10-20 sessions",
            protocol: "Anode over M1 contralateral to pain (2 mA, 20 min)",
            frequency: "Daily or alternate days",
            references: "Vaseghi et al., 2014; O'Connell et al., 2018",
            contraindications: &["Skin conditions", "Metal implants"],
            notes:
                "Home-based protocols being investigated. May provide short-term relief requiring repeated courses.",
        },
    ),
];

static PTSD_MODALITIES: [(ModalityId, ModalityRecord); 2] = [
    (
        ModalityId::Rtms,
        ModalityRecord {
            name: "rTMS (Repetitive Transcranial Magnetic Stimulation)",
            efficacy: "Moderate",
            effect_size: "0.40-0.60",
            fda_approved: false,
            evidence_level: "Level 2",
            response_rate: "40-55%",
            remission_rate: "25-35%",
            sessions: "20-30 sessions",
            protocol:
                "High frequency (10-20 Hz) to right DLPFC or low frequency (1 Hz) to right DLPFC",
            frequency: "Daily, 5 days/week",
            references: "Kan et al., 2020; Petrosino et al., 2021",
            contraindications: &["Standard TMS contraindications"],
            notes:
                "Emerging evidence. Right DLPFC targeting shows promise. May reduce hyperarousal symptoms.",
        },
    ),
    (
        ModalityId::Tdcs,
        ModalityRecord {
            name: "tDCS (Transcranial Direct Current Stimulation)",
            efficacy: "Low-Moderate",
            effect_size: "0.30-0.45",
            fda_approved: false,
            evidence_level: "Level 3",
            response_rate: "35-45%",
            remission_rate: "20-30%",
            sessions: "10-20 sessions",
            protocol: "Anode left DLPFC, cathode right DLPFC (2 mA, 20 min)",
            frequency: "Daily or alternate days",
            references: "Saunders et al., 2020; van't Wout-Frank et al., 2021",
            contraindications: &["Standard tDCS contraindications"],
            notes:
                "Preliminary evidence. Often studied in combination with trauma-focused therapy.",
        },
    ),
];

static SCHIZOPHRENIA_MODALITIES: [(ModalityId, ModalityRecord); 2] = [
    (
        ModalityId::Rtms,
        ModalityRecord {
            name: "rTMS (Repetitive Transcranial Magnetic Stimulation)",
            efficacy: "Moderate",
            effect_size: "0.35-0.50",
            fda_approved: false,
            evidence_level: "Level 1B",
            response_rate: "35-50%",
            remission_rate: "20-30%",
            sessions: "10-20 sessions",
            protocol: "Low frequency (1 Hz) to left temporoparietal cortex (T3-P3)",
            frequency: "Daily, 5 days/week",
            references: "Slotema et al., 2012; Kennedy et al., 2018",
            contraindications: &["Catatonia", "unstabilized medication"],
            notes:
                "Best for medication-resistant auditory hallucinations. Requires stable antipsychotic regimen.",
        },
    ),
    (
        ModalityId::Tdcs,
        ModalityRecord {
            name: "tDCS (Transcranial Direct Current Stimulation)",
            efficacy: "Low-Moderate",
            effect_size: "0.25-0.40",
            fda_approved: false,
            evidence_level: "Level 2",
            response_rate: "30-40%",
            remission_rate: "15-25%",
            sessions: "10-20 sessions",
            protocol: "Anode left DLPFC, cathode left temporoparietal (2 mA, 20 min)",
            frequency: "Daily or alternate days",
            references: "Mondino et al., 2016; Koops et al., 2018",
            contraindications: &["Acute psychotic episode"],
            notes: "May help with negative symptoms and cognitive deficits. Research ongoing.",
        },
    ),
];

/// Every disorder in picker order.
pub static DISORDERS: [DisorderRecord; 6] = [
    DisorderRecord {
        id: DisorderId::Depression,
        display_name: "Major Depressive Disorder",
        modalities: &DEPRESSION_MODALITIES,
    },
    DisorderRecord {
        id: DisorderId::Ocd,
        display_name: "Obsessive-Compulsive Disorder",
        modalities: &OCD_MODALITIES,
    },
    DisorderRecord {
        id: DisorderId::Stroke,
        display_name: "Stroke Rehabilitation (Motor Recovery)",
        modalities: &STROKE_MODALITIES,
    },
    DisorderRecord {
        id: DisorderId::ChronicPain,
        display_name: "Chronic Pain (Neuropathic/Fibromyalgia)",
        modalities: &CHRONIC_PAIN_MODALITIES,
    },
    DisorderRecord {
        id: DisorderId::Ptsd,
        display_name: "Post-Traumatic Stress Disorder",
        modalities: &PTSD_MODALITIES,
    },
    DisorderRecord {
        id: DisorderId::Schizophrenia,
        display_name: "Schizophrenia (Auditory Hallucinations)",
        modalities: &SCHIZOPHRENIA_MODALITIES,
    },
];
