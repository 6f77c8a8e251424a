//! Historical platform-name alias table
//!
//! Pure data: every retired platform spelling ever shipped, mapped to the
//! current canonical identifier. Entries are append-only; a spelling is never
//! deleted, only superseded. Canonical identifiers never appear as keys.

/// (retired spelling, canonical identifier)
pub(crate) const PLATFORM_ALIASES: &[(&str, &str)] = &[
    ("ACURA ILX 2016 ACURAWATCH PLUS", "ACURA_ILX"),
    ("ACURA RDX 2018 ACURAWATCH PLUS", "ACURA_RDX"),
    ("ACURA RDX 2020 TECH", "ACURA_RDX_3G"),
    ("AUDI A3", "AUDI_A3_MK3"),
    ("HONDA ACCORD 2018 HYBRID TOURING", "HONDA_ACCORD"),
    ("HONDA ACCORD 1.5T 2018", "HONDA_ACCORD"),
    ("HONDA ACCORD 2018 LX 1.5T", "HONDA_ACCORD"),
    ("HONDA ACCORD 2018 SPORT 2T", "HONDA_ACCORD"),
    ("HONDA ACCORD 2T 2018", "HONDA_ACCORD"),
    ("HONDA ACCORD HYBRID 2018", "HONDA_ACCORD"),
    ("HONDA CIVIC 2016 TOURING", "HONDA_CIVIC"),
    ("HONDA CIVIC HATCHBACK 2017 SEDAN/COUPE 2019", "HONDA_CIVIC_BOSCH"),
    ("HONDA CIVIC SEDAN 1.6 DIESEL", "HONDA_CIVIC_BOSCH_DIESEL"),
    ("HONDA CR-V 2016 EXECUTIVE", "HONDA_CRV_EU"),
    ("HONDA CR-V 2016 TOURING", "HONDA_CRV"),
    ("HONDA CR-V 2017 EX", "HONDA_CRV_5G"),
    ("HONDA CR-V 2019 HYBRID", "HONDA_CRV_HYBRID"),
    ("HONDA FIT 2018 EX", "HONDA_FIT"),
    ("HONDA HRV 2019 TOURING", "HONDA_HRV"),
    ("HONDA INSIGHT 2019 TOURING", "HONDA_INSIGHT"),
    ("HONDA ODYSSEY 2018 EX-L", "HONDA_ODYSSEY"),
    ("HONDA ODYSSEY 2019 EXCLUSIVE CHN", "HONDA_ODYSSEY_CHN"),
    ("HONDA PILOT 2017 TOURING", "HONDA_PILOT"),
    ("HONDA PILOT 2019 ELITE", "HONDA_PILOT"),
    ("HONDA PILOT 2019", "HONDA_PILOT"),
    ("HONDA PASSPORT 2021", "HONDA_PILOT"),
    ("HONDA RIDGELINE 2017 BLACK EDITION", "HONDA_RIDGELINE"),
    ("LEXUS CT 200H 2018", "LEXUS_CTH"),
    ("LEXUS ES 300H 2018", "LEXUS_ES"),
    ("LEXUS ES 300H 2019", "LEXUS_ES_TSS2"),
    ("LEXUS IS300 2018", "LEXUS_IS"),
    ("LEXUS NX300 2018", "LEXUS_NX"),
    ("LEXUS NX300H 2018", "LEXUS_NX"),
    ("LEXUS RX 350 2016", "LEXUS_RX"),
    ("LEXUS RX350 2020", "LEXUS_RX_TSS2"),
    ("LEXUS RX450 HYBRID 2020", "LEXUS_RX_TSS2"),
    ("TOYOTA SIENNA XLE 2018", "TOYOTA_SIENNA"),
    ("TOYOTA C-HR HYBRID 2018", "TOYOTA_CHR"),
    ("TOYOTA COROLLA HYBRID TSS2 2019", "TOYOTA_COROLLA_TSS2"),
    ("TOYOTA RAV4 HYBRID 2019", "TOYOTA_RAV4_TSS2"),
    ("LEXUS ES HYBRID 2019", "LEXUS_ES_TSS2"),
    ("LEXUS NX HYBRID 2018", "LEXUS_NX"),
    ("LEXUS NX HYBRID 2020", "LEXUS_NX_TSS2"),
    ("LEXUS RX HYBRID 2020", "LEXUS_RX_TSS2"),
    ("TOYOTA ALPHARD HYBRID 2021", "TOYOTA_ALPHARD_TSS2"),
    ("TOYOTA AVALON HYBRID 2019", "TOYOTA_AVALON_2019"),
    ("TOYOTA AVALON HYBRID 2022", "TOYOTA_AVALON_TSS2"),
    ("TOYOTA CAMRY HYBRID 2018", "TOYOTA_CAMRY"),
    ("TOYOTA CAMRY HYBRID 2021", "TOYOTA_CAMRY_TSS2"),
    ("TOYOTA C-HR HYBRID 2022", "TOYOTA_CHR_TSS2"),
    ("TOYOTA HIGHLANDER HYBRID 2020", "TOYOTA_HIGHLANDER_TSS2"),
    ("TOYOTA RAV4 HYBRID 2022", "TOYOTA_RAV4_TSS2_2022"),
    ("TOYOTA RAV4 HYBRID 2023", "TOYOTA_RAV4_TSS2_2023"),
    ("TOYOTA HIGHLANDER HYBRID 2018", "TOYOTA_HIGHLANDER"),
    ("LEXUS ES HYBRID 2018", "LEXUS_ES"),
    ("LEXUS RX HYBRID 2017", "LEXUS_RX"),
    // Spellings retired when platform identifiers were normalized
    ("COMMA BODY", "COMMA_BODY"),
    ("CHRYSLER PACIFICA HYBRID 2017", "CHRYSLER_PACIFICA_2017_HYBRID"),
    ("CHRYSLER PACIFICA HYBRID 2018", "CHRYSLER_PACIFICA_2018_HYBRID"),
    ("CHRYSLER PACIFICA HYBRID 2019", "CHRYSLER_PACIFICA_2019_HYBRID"),
    ("CHRYSLER PACIFICA 2018", "CHRYSLER_PACIFICA_2018"),
    ("CHRYSLER PACIFICA 2020", "CHRYSLER_PACIFICA_2020"),
    ("DODGE DURANGO 2021", "DODGE_DURANGO"),
    ("RAM 1500 5TH GEN", "RAM_1500_5TH_GEN"),
    ("RAM HD 5TH GEN", "RAM_HD_5TH_GEN"),
    ("FORD BRONCO SPORT 1ST GEN", "FORD_BRONCO_SPORT_MK1"),
    ("FORD ESCAPE 4TH GEN", "FORD_ESCAPE_MK4"),
    ("FORD EXPLORER 6TH GEN", "FORD_EXPLORER_MK6"),
    ("FORD F-150 14TH GEN", "FORD_F_150_MK14"),
    ("FORD F-150 LIGHTNING 1ST GEN", "FORD_F_150_LIGHTNING_MK1"),
    ("FORD FOCUS 4TH GEN", "FORD_FOCUS_MK4"),
    ("FORD MAVERICK 1ST GEN", "FORD_MAVERICK_MK1"),
    ("FORD MUSTANG MACH-E 1ST GEN", "FORD_MUSTANG_MACH_E_MK1"),
    ("HOLDEN ASTRA RS-V BK 2017", "HOLDEN_ASTRA"),
    ("CHEVROLET VOLT PREMIER 2017", "CHEVROLET_VOLT"),
    ("CADILLAC ATS Premium Performance 2018", "CADILLAC_ATS"),
    ("CHEVROLET MALIBU PREMIER 2017", "CHEVROLET_MALIBU"),
    ("GMC ACADIA DENALI 2018", "GMC_ACADIA"),
    ("BUICK LACROSSE 2017", "BUICK_LACROSSE"),
    ("BUICK REGAL ESSENCE 2018", "BUICK_REGAL"),
    ("CADILLAC ESCALADE 2017", "CADILLAC_ESCALADE"),
    ("CADILLAC ESCALADE ESV 2016", "CADILLAC_ESCALADE_ESV"),
    ("CADILLAC ESCALADE ESV 2019", "CADILLAC_ESCALADE_ESV_2019"),
    ("CHEVROLET BOLT EUV 2022", "CHEVROLET_BOLT_EUV"),
    ("CHEVROLET SILVERADO 1500 2020", "CHEVROLET_SILVERADO"),
    ("CHEVROLET EQUINOX 2019", "CHEVROLET_EQUINOX"),
    ("CHEVROLET TRAILBLAZER 2021", "CHEVROLET_TRAILBLAZER"),
    ("HONDA ACCORD 2018", "HONDA_ACCORD"),
    ("HONDA CIVIC (BOSCH) 2019", "HONDA_CIVIC_BOSCH"),
    ("HONDA CIVIC SEDAN 1.6 DIESEL 2019", "HONDA_CIVIC_BOSCH_DIESEL"),
    ("HONDA CIVIC 2022", "HONDA_CIVIC_2022"),
    ("HONDA CR-V 2017", "HONDA_CRV_5G"),
    ("HONDA CR-V HYBRID 2019", "HONDA_CRV_HYBRID"),
    ("HONDA HR-V 2023", "HONDA_HRV_3G"),
    ("ACURA RDX 2020", "ACURA_RDX_3G"),
    ("HONDA INSIGHT 2019", "HONDA_INSIGHT"),
    ("HONDA E 2020", "HONDA_E"),
    ("ACURA ILX 2016", "ACURA_ILX"),
    ("HONDA CR-V 2016", "HONDA_CRV"),
    ("HONDA CR-V EU 2016", "HONDA_CRV_EU"),
    ("HONDA FIT 2018", "HONDA_FIT"),
    ("HONDA FREED 2020", "HONDA_FREED"),
    ("HONDA HRV 2019", "HONDA_HRV"),
    ("HONDA ODYSSEY 2018", "HONDA_ODYSSEY"),
    ("HONDA ODYSSEY CHN 2019", "HONDA_ODYSSEY_CHN"),
    ("ACURA RDX 2018", "ACURA_RDX"),
    ("HONDA PILOT 2017", "HONDA_PILOT"),
    ("HONDA RIDGELINE 2017", "HONDA_RIDGELINE"),
    ("HONDA CIVIC 2016", "HONDA_CIVIC"),
    ("HYUNDAI AZERA 6TH GEN", "HYUNDAI_AZERA_6TH_GEN"),
    ("HYUNDAI AZERA HYBRID 6TH GEN", "HYUNDAI_AZERA_HEV_6TH_GEN"),
    ("HYUNDAI ELANTRA 2017", "HYUNDAI_ELANTRA"),
    ("HYUNDAI I30 N LINE 2019 & GT 2018 DCT", "HYUNDAI_ELANTRA_GT_I30"),
    ("HYUNDAI ELANTRA 2021", "HYUNDAI_ELANTRA_2021"),
    ("HYUNDAI ELANTRA HYBRID 2021", "HYUNDAI_ELANTRA_HEV_2021"),
    ("HYUNDAI GENESIS 2015-2016", "HYUNDAI_GENESIS"),
    ("HYUNDAI IONIQ HYBRID 2017-2019", "HYUNDAI_IONIQ"),
    ("HYUNDAI IONIQ HYBRID 2020-2022", "HYUNDAI_IONIQ_HEV_2022"),
    ("HYUNDAI IONIQ ELECTRIC LIMITED 2019", "HYUNDAI_IONIQ_EV_LTD"),
    ("HYUNDAI IONIQ ELECTRIC 2020", "HYUNDAI_IONIQ_EV_2020"),
    ("HYUNDAI IONIQ PLUG-IN HYBRID 2019", "HYUNDAI_IONIQ_PHEV_2019"),
    ("HYUNDAI IONIQ PHEV 2020", "HYUNDAI_IONIQ_PHEV"),
    ("HYUNDAI KONA 2020", "HYUNDAI_KONA"),
    ("HYUNDAI KONA ELECTRIC 2019", "HYUNDAI_KONA_EV"),
    ("HYUNDAI KONA ELECTRIC 2022", "HYUNDAI_KONA_EV_2022"),
    ("HYUNDAI KONA ELECTRIC 2ND GEN", "HYUNDAI_KONA_EV_2ND_GEN"),
    ("HYUNDAI KONA HYBRID 2020", "HYUNDAI_KONA_HEV"),
    ("HYUNDAI SANTA FE 2019", "HYUNDAI_SANTA_FE"),
    ("HYUNDAI SANTA FE 2022", "HYUNDAI_SANTA_FE_2022"),
    ("HYUNDAI SANTA FE HYBRID 2022", "HYUNDAI_SANTA_FE_HEV_2022"),
    ("HYUNDAI SANTA FE PlUG-IN HYBRID 2022", "HYUNDAI_SANTA_FE_PHEV_2022"),
    ("HYUNDAI SONATA 2020", "HYUNDAI_SONATA"),
    ("HYUNDAI SONATA 2019", "HYUNDAI_SONATA_LF"),
    ("HYUNDAI STARIA 4TH GEN", "HYUNDAI_STARIA_4TH_GEN"),
    ("HYUNDAI TUCSON 2019", "HYUNDAI_TUCSON"),
    ("HYUNDAI PALISADE 2020", "HYUNDAI_PALISADE"),
    ("HYUNDAI VELOSTER 2019", "HYUNDAI_VELOSTER"),
    ("HYUNDAI SONATA HYBRID 2021", "HYUNDAI_SONATA_HYBRID"),
    ("HYUNDAI IONIQ 5 2022", "HYUNDAI_IONIQ_5"),
    ("HYUNDAI IONIQ 6 2023", "HYUNDAI_IONIQ_6"),
    ("HYUNDAI TUCSON 4TH GEN", "HYUNDAI_TUCSON_4TH_GEN"),
    ("HYUNDAI SANTA CRUZ 1ST GEN", "HYUNDAI_SANTA_CRUZ_1ST_GEN"),
    ("HYUNDAI CUSTIN 1ST GEN", "HYUNDAI_CUSTIN_1ST_GEN"),
    ("KIA FORTE E 2018 & GT 2021", "KIA_FORTE"),
    ("KIA K5 2021", "KIA_K5_2021"),
    ("KIA K5 HYBRID 2020", "KIA_K5_HEV_2020"),
    ("KIA K8 HYBRID 1ST GEN", "KIA_K8_HEV_1ST_GEN"),
    ("KIA NIRO EV 2020", "KIA_NIRO_EV"),
    ("KIA NIRO EV 2ND GEN", "KIA_NIRO_EV_2ND_GEN"),
    ("KIA NIRO HYBRID 2019", "KIA_NIRO_PHEV"),
    ("KIA NIRO PLUG-IN HYBRID 2022", "KIA_NIRO_PHEV_2022"),
    ("KIA NIRO HYBRID 2021", "KIA_NIRO_HEV_2021"),
    ("KIA NIRO HYBRID 2ND GEN", "KIA_NIRO_HEV_2ND_GEN"),
    ("KIA OPTIMA 4TH GEN", "KIA_OPTIMA_G4"),
    ("KIA OPTIMA 4TH GEN FACELIFT", "KIA_OPTIMA_G4_FL"),
    ("KIA OPTIMA HYBRID 2017 & SPORTS 2019", "KIA_OPTIMA_H"),
    ("KIA OPTIMA HYBRID 4TH GEN FACELIFT", "KIA_OPTIMA_H_G4_FL"),
    ("KIA SELTOS 2021", "KIA_SELTOS"),
    ("KIA SPORTAGE 5TH GEN", "KIA_SPORTAGE_5TH_GEN"),
    ("KIA SORENTO GT LINE 2018", "KIA_SORENTO"),
    ("KIA SORENTO 4TH GEN", "KIA_SORENTO_4TH_GEN"),
    ("KIA SORENTO HYBRID 4TH GEN", "KIA_SORENTO_HEV_4TH_GEN"),
    ("KIA STINGER GT2 2018", "KIA_STINGER"),
    ("KIA STINGER 2022", "KIA_STINGER_2022"),
    ("KIA CEED INTRO ED 2019", "KIA_CEED"),
    ("KIA EV6 2022", "KIA_EV6"),
    ("KIA CARNIVAL 4TH GEN", "KIA_CARNIVAL_4TH_GEN"),
    ("GENESIS GV60 ELECTRIC 1ST GEN", "GENESIS_GV60_EV_1ST_GEN"),
    ("GENESIS G70 2018", "GENESIS_G70"),
    ("GENESIS G70 2020", "GENESIS_G70_2020"),
    ("GENESIS GV70 1ST GEN", "GENESIS_GV70_1ST_GEN"),
    ("GENESIS G80 2017", "GENESIS_G80"),
    ("GENESIS G90 2017", "GENESIS_G90"),
    ("GENESIS GV80 2023", "GENESIS_GV80"),
    ("MAZDA CX-5", "MAZDA_CX5"),
    ("MAZDA CX-9", "MAZDA_CX9"),
    ("MAZDA 3", "MAZDA_3"),
    ("MAZDA 6", "MAZDA_6"),
    ("MAZDA CX-9 2021", "MAZDA_CX9_2021"),
    ("MAZDA CX-5 2022", "MAZDA_CX5_2022"),
    ("NISSAN X-TRAIL 2017", "NISSAN_XTRAIL"),
    ("NISSAN LEAF 2018", "NISSAN_LEAF"),
    ("NISSAN ROGUE 2019", "NISSAN_ROGUE"),
    ("NISSAN ALTIMA 2020", "NISSAN_ALTIMA"),
    ("SUBARU ASCENT LIMITED 2019", "SUBARU_ASCENT"),
    ("SUBARU OUTBACK 6TH GEN", "SUBARU_OUTBACK"),
    ("SUBARU LEGACY 7TH GEN", "SUBARU_LEGACY"),
    ("SUBARU IMPREZA LIMITED 2019", "SUBARU_IMPREZA"),
    ("SUBARU IMPREZA SPORT 2020", "SUBARU_IMPREZA_2020"),
    ("SUBARU CROSSTREK HYBRID 2020", "SUBARU_CROSSTREK_HYBRID"),
    ("SUBARU FORESTER 2019", "SUBARU_FORESTER"),
    ("SUBARU FORESTER HYBRID 2020", "SUBARU_FORESTER_HYBRID"),
    ("SUBARU FORESTER 2017 - 2018", "SUBARU_FORESTER_PREGLOBAL"),
    ("SUBARU LEGACY 2015 - 2018", "SUBARU_LEGACY_PREGLOBAL"),
    ("SUBARU OUTBACK 2015 - 2017", "SUBARU_OUTBACK_PREGLOBAL"),
    ("SUBARU OUTBACK 2018 - 2019", "SUBARU_OUTBACK_PREGLOBAL_2018"),
    ("SUBARU FORESTER 2022", "SUBARU_FORESTER_2022"),
    ("SUBARU OUTBACK 7TH GEN", "SUBARU_OUTBACK_2023"),
    ("SUBARU ASCENT 2023", "SUBARU_ASCENT_2023"),
    ("TESLA AP1 MODEL S", "TESLA_AP1_MODELS"),
    ("TESLA AP2 MODEL S", "TESLA_AP2_MODELS"),
    ("TESLA MODEL S RAVEN", "TESLA_MODELS_RAVEN"),
    ("TOYOTA ALPHARD 2020", "TOYOTA_ALPHARD_TSS2"),
    ("TOYOTA AVALON 2016", "TOYOTA_AVALON"),
    ("TOYOTA AVALON 2019", "TOYOTA_AVALON_2019"),
    ("TOYOTA AVALON 2022", "TOYOTA_AVALON_TSS2"),
    ("TOYOTA CAMRY 2018", "TOYOTA_CAMRY"),
    ("TOYOTA CAMRY 2021", "TOYOTA_CAMRY_TSS2"),
    ("TOYOTA C-HR 2018", "TOYOTA_CHR"),
    ("TOYOTA C-HR 2021", "TOYOTA_CHR_TSS2"),
    ("TOYOTA COROLLA 2017", "TOYOTA_COROLLA"),
    ("TOYOTA COROLLA TSS2 2019", "TOYOTA_COROLLA_TSS2"),
    ("TOYOTA HIGHLANDER 2017", "TOYOTA_HIGHLANDER"),
    ("TOYOTA HIGHLANDER 2020", "TOYOTA_HIGHLANDER_TSS2"),
    ("TOYOTA PRIUS 2017", "TOYOTA_PRIUS"),
    ("TOYOTA PRIUS v 2017", "TOYOTA_PRIUS_V"),
    ("TOYOTA PRIUS TSS2 2021", "TOYOTA_PRIUS_TSS2"),
    ("TOYOTA RAV4 2017", "TOYOTA_RAV4"),
    ("TOYOTA RAV4 HYBRID 2017", "TOYOTA_RAV4H"),
    ("TOYOTA RAV4 2019", "TOYOTA_RAV4_TSS2"),
    ("TOYOTA RAV4 2022", "TOYOTA_RAV4_TSS2_2022"),
    ("TOYOTA RAV4 2023", "TOYOTA_RAV4_TSS2_2023"),
    ("TOYOTA MIRAI 2021", "TOYOTA_MIRAI"),
    ("TOYOTA SIENNA 2018", "TOYOTA_SIENNA"),
    ("LEXUS CT HYBRID 2018", "LEXUS_CTH"),
    ("LEXUS ES 2018", "LEXUS_ES"),
    ("LEXUS ES 2019", "LEXUS_ES_TSS2"),
    ("LEXUS IS 2018", "LEXUS_IS"),
    ("LEXUS IS 2023", "LEXUS_IS_TSS2"),
    ("LEXUS NX 2018", "LEXUS_NX"),
    ("LEXUS NX 2020", "LEXUS_NX_TSS2"),
    ("LEXUS LC 2024", "LEXUS_LC_TSS2"),
    ("LEXUS RC 2020", "LEXUS_RC"),
    ("LEXUS RX 2016", "LEXUS_RX"),
    ("LEXUS RX 2020", "LEXUS_RX_TSS2"),
    ("LEXUS GS F 2016", "LEXUS_GS_F"),
    ("VOLKSWAGEN ARTEON 1ST GEN", "VOLKSWAGEN_ARTEON_MK1"),
    ("VOLKSWAGEN ATLAS 1ST GEN", "VOLKSWAGEN_ATLAS_MK1"),
    ("VOLKSWAGEN CADDY 3RD GEN", "VOLKSWAGEN_CADDY_MK3"),
    ("VOLKSWAGEN CRAFTER 2ND GEN", "VOLKSWAGEN_CRAFTER_MK2"),
    ("VOLKSWAGEN GOLF 7TH GEN", "VOLKSWAGEN_GOLF_MK7"),
    ("VOLKSWAGEN JETTA 7TH GEN", "VOLKSWAGEN_JETTA_MK7"),
    ("VOLKSWAGEN PASSAT 8TH GEN", "VOLKSWAGEN_PASSAT_MK8"),
    ("VOLKSWAGEN PASSAT NMS", "VOLKSWAGEN_PASSAT_NMS"),
    ("VOLKSWAGEN POLO 6TH GEN", "VOLKSWAGEN_POLO_MK6"),
    ("VOLKSWAGEN SHARAN 2ND GEN", "VOLKSWAGEN_SHARAN_MK2"),
    ("VOLKSWAGEN TAOS 1ST GEN", "VOLKSWAGEN_TAOS_MK1"),
    ("VOLKSWAGEN T-CROSS 1ST GEN", "VOLKSWAGEN_TCROSS_MK1"),
    ("VOLKSWAGEN TIGUAN 2ND GEN", "VOLKSWAGEN_TIGUAN_MK2"),
    ("VOLKSWAGEN TOURAN 2ND GEN", "VOLKSWAGEN_TOURAN_MK2"),
    ("VOLKSWAGEN TRANSPORTER T6.1", "VOLKSWAGEN_TRANSPORTER_T61"),
    ("VOLKSWAGEN T-ROC 1ST GEN", "VOLKSWAGEN_TROC_MK1"),
    ("AUDI A3 3RD GEN", "AUDI_A3_MK3"),
    ("AUDI Q2 1ST GEN", "AUDI_Q2_MK1"),
    ("AUDI Q3 2ND GEN", "AUDI_Q3_MK2"),
    ("SEAT ATECA 1ST GEN", "SEAT_ATECA_MK1"),
    ("SEAT LEON 3RD GEN", "SEAT_LEON_MK3"),
    ("SKODA FABIA 4TH GEN", "SKODA_FABIA_MK4"),
    ("SKODA KAMIQ 1ST GEN", "SKODA_KAMIQ_MK1"),
    ("SKODA KAROQ 1ST GEN", "SKODA_KAROQ_MK1"),
    ("SKODA KODIAQ 1ST GEN", "SKODA_KODIAQ_MK1"),
    ("SKODA OCTAVIA 3RD GEN", "SKODA_OCTAVIA_MK3"),
    ("SKODA SCALA 1ST GEN", "SKODA_SCALA_MK1"),
    ("SKODA SUPERB 3RD GEN", "SKODA_SUPERB_MK3"),
];
