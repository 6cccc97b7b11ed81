//! ISO 3166-1 alpha-2 region codes.

wire_enum! {
    /// The alpha-2 representation of a country, as defined by the ISO 3166-1
    /// standard. Each variant is documented with the country it represents.
    pub enum RegionCode {
        /// A region this version of the SDK doesn't know about.
        Undefined,

        /// Afghanistan.
        Af = "AF",
        /// Åland Islands.
        Ax = "AX",
        /// Albania.
        Al = "AL",
        /// Algeria.
        Dz = "DZ",
        /// American Samoa.
        As = "AS",
        /// Andorra.
        Ad = "AD",
        /// Angola.
        Ao = "AO",
        /// Anguilla.
        Ai = "AI",
        /// Antarctica.
        Aq = "AQ",
        /// Antigua and Barbuda.
        Ag = "AG",
        /// Argentina.
        Ar = "AR",
        /// Armenia.
        Am = "AM",
        /// Aruba.
        Aw = "AW",
        /// Australia.
        Au = "AU",
        /// Austria.
        At = "AT",
        /// Azerbaijan.
        Az = "AZ",
        /// Bahamas.
        Bs = "BS",
        /// Bahrain.
        Bh = "BH",
        /// Bangladesh.
        Bd = "BD",
        /// Barbados.
        Bb = "BB",
        /// Belarus.
        By = "BY",
        /// Belgium.
        Be = "BE",
        /// Belize.
        Bz = "BZ",
        /// Benin.
        Bj = "BJ",
        /// Bermuda.
        Bm = "BM",
        /// Bhutan.
        Bt = "BT",
        /// The Plurinational State of Bolivia.
        Bo = "BO",
        /// Bonaire, Sint Eustatius, and Saba.
        Bq = "BQ",
        /// Bosnia and Herzegovina.
        Ba = "BA",
        /// Botswana.
        Bw = "BW",
        /// Bouvet Island.
        Bv = "BV",
        /// Brazil.
        Br = "BR",
        /// British Indian Ocean Territory.
        Io = "IO",
        /// Brunei Darussalam.
        Bn = "BN",
        /// Bulgaria.
        Bg = "BG",
        /// Burkina Faso.
        Bf = "BF",
        /// Burundi.
        Bi = "BI",
        /// Cambodia.
        Kh = "KH",
        /// Cameroon.
        Cm = "CM",
        /// Canada.
        Ca = "CA",
        /// Cape Verde.
        Cv = "CV",
        /// Cayman Islands.
        Ky = "KY",
        /// Central African Republic.
        Cf = "CF",
        /// Chad.
        Td = "TD",
        /// Chile.
        Cl = "CL",
        /// China.
        Cn = "CN",
        /// Christmas Island.
        Cx = "CX",
        /// Cocos (Keeling) Islands.
        Cc = "CC",
        /// Colombia.
        Co = "CO",
        /// Comoros.
        Km = "KM",
        /// Congo.
        Cg = "CG",
        /// The Democratic Republic of the Congo.
        Cd = "CD",
        /// Cook Islands.
        Ck = "CK",
        /// Costa Rica.
        Cr = "CR",
        /// Côte d'Ivoire.
        Ci = "CI",
        /// Croatia.
        Hr = "HR",
        /// Cuba.
        Cu = "CU",
        /// Curaçao.
        Cw = "CW",
        /// Cyprus.
        Cy = "CY",
        /// Czech Republic.
        Cz = "CZ",
        /// Denmark.
        Dk = "DK",
        /// Djibouti.
        Dj = "DJ",
        /// Dominica.
        Dm = "DM",
        /// Dominican Republic.
        Do = "DO",
        /// Ecuador.
        Ec = "EC",
        /// Egypt.
        Eg = "EG",
        /// El Salvador.
        Sv = "SV",
        /// Equatorial Guinea.
        Gq = "GQ",
        /// Eritrea.
        Er = "ER",
        /// Estonia.
        Ee = "EE",
        /// Ethiopia.
        Et = "ET",
        /// Falkland Islands (Malvinas).
        Fk = "FK",
        /// Faroe Islands.
        Fo = "FO",
        /// Fiji.
        Fj = "FJ",
        /// Finland.
        Fi = "FI",
        /// France.
        Fr = "FR",
        /// French Guiana.
        Gf = "GF",
        /// French Polynesia.
        Pf = "PF",
        /// French Southern Territories.
        Tf = "TF",
        /// Gabon.
        Ga = "GA",
        /// Gambia.
        Gm = "GM",
        /// Georgia.
        Ge = "GE",
        /// Germany.
        De = "DE",
        /// Ghana.
        Gh = "GH",
        /// Gibraltar.
        Gi = "GI",
        /// Greece.
        Gr = "GR",
        /// Greenland.
        Gl = "GL",
        /// Grenada.
        Gd = "GD",
        /// Guadeloupe.
        Gp = "GP",
        /// Guam.
        Gu = "GU",
        /// Guatemala.
        Gt = "GT",
        /// Guernsey.
        Gg = "GG",
        /// Guinea.
        Gn = "GN",
        /// Guinea-Bissau.
        Gw = "GW",
        /// Guyana.
        Gy = "GY",
        /// Haiti.
        Ht = "HT",
        /// Heard Island and McDonald Islands.
        Hm = "HM",
        /// Holy See (Vatican City State).
        Va = "VA",
        /// Honduras.
        Hn = "HN",
        /// Hong Kong.
        Hk = "HK",
        /// Hungary.
        Hu = "HU",
        /// Iceland.
        Is = "IS",
        /// India.
        In = "IN",
        /// Indonesia.
        Id = "ID",
        /// Islamic Republic of Iran.
        Ir = "IR",
        /// Iraq.
        Iq = "IQ",
        /// Ireland.
        Ie = "IE",
        /// Isle of Man.
        Im = "IM",
        /// Israel.
        Il = "IL",
        /// Italy.
        It = "IT",
        /// Jamaica.
        Jm = "JM",
        /// Japan.
        Jp = "JP",
        /// Jersey.
        Je = "JE",
        /// Jordan.
        Jo = "JO",
        /// Kazakhstan.
        Kz = "KZ",
        /// Kenya.
        Ke = "KE",
        /// Kiribati.
        Ki = "KI",
        /// Democratic People's Republic ofKorea.
        Kp = "KP",
        /// Republic of Korea.
        Kr = "KR",
        /// Kuwait.
        Kw = "KW",
        /// Kyrgyzstan.
        Kg = "KG",
        /// Lao People's Democratic Republic.
        La = "LA",
        /// Latvia.
        Lv = "LV",
        /// Lebanon.
        Lb = "LB",
        /// Lesotho.
        Ls = "LS",
        /// Liberia.
        Lr = "LR",
        /// Libya.
        Ly = "LY",
        /// Liechtenstein.
        Li = "LI",
        /// Lithuania.
        Lt = "LT",
        /// Luxembourg.
        Lu = "LU",
        /// Macao.
        Mo = "MO",
        /// The Former Yugoslav Republic of Macedonia.
        Mk = "MK",
        /// Madagascar.
        Mg = "MG",
        /// Malawi.
        Mw = "MW",
        /// Malaysia.
        My = "MY",
        /// Maldives.
        Mv = "MV",
        /// Mali.
        Ml = "ML",
        /// Malta.
        Mt = "MT",
        /// Marshall Islands.
        Mh = "MH",
        /// Martinique.
        Mq = "MQ",
        /// Mauritania.
        Mr = "MR",
        /// Mauritius.
        Mu = "MU",
        /// Mayotte.
        Yt = "YT",
        /// Mexico.
        Mx = "MX",
        /// Federated States ofMicronesia.
        Fm = "FM",
        /// Republic of Moldova.
        Md = "MD",
        /// Monaco.
        Mc = "MC",
        /// Mongolia.
        Mn = "MN",
        /// Montenegro.
        Me = "ME",
        /// Montserrat.
        Ms = "MS",
        /// Morocco.
        Ma = "MA",
        /// Mozambique.
        Mz = "MZ",
        /// Myanmar.
        Mm = "MM",
        /// Namibia.
        Na = "NA",
        /// Nauru.
        Nr = "NR",
        /// Nepal.
        Np = "NP",
        /// Netherlands.
        Nl = "NL",
        /// New Caledonia.
        Nc = "NC",
        /// New Zealand.
        Nz = "NZ",
        /// Nicaragua.
        Ni = "NI",
        /// Niger.
        Ne = "NE",
        /// Nigeria.
        Ng = "NG",
        /// Niue.
        Nu = "NU",
        /// Norfolk Island.
        Nf = "NF",
        /// Northern Mariana Islands.
        Mp = "MP",
        /// Norway.
        No = "NO",
        /// Oman.
        Om = "OM",
        /// Pakistan.
        Pk = "PK",
        /// Palau.
        Pw = "PW",
        /// State of Palestine.
        Ps = "PS",
        /// Panama.
        Pa = "PA",
        /// Papua New Guinea.
        Pg = "PG",
        /// Paraguay.
        Py = "PY",
        /// Peru.
        Pe = "PE",
        /// Philippines.
        Ph = "PH",
        /// Pitcairn.
        Pn = "PN",
        /// Poland.
        Pl = "PL",
        /// Portugal.
        Pt = "PT",
        /// Puerto Rico.
        Pr = "PR",
        /// Qatar.
        Qa = "QA",
        /// Réunion.
        Re = "RE",
        /// Romania.
        Ro = "RO",
        /// Russian Federation.
        Ru = "RU",
        /// Rwanda.
        Rw = "RW",
        /// Saint Barthélemy.
        Bl = "BL",
        /// Saint Helena  Ascension and Tristan da Cunha.
        Sh = "SH",
        /// Saint Kitts and Nevis.
        Kn = "KN",
        /// Saint Lucia.
        Lc = "LC",
        /// Saint Martin (French part).
        Mf = "MF",
        /// Saint Pierre and Miquelon.
        Pm = "PM",
        /// Saint Vincent and the Grenadines.
        Vc = "VC",
        /// Samoa.
        Ws = "WS",
        /// San Marino.
        Sm = "SM",
        /// Sao Tome and Principe.
        St = "ST",
        /// Saudi Arabia.
        Sa = "SA",
        /// Senegal.
        Sn = "SN",
        /// Serbia.
        Rs = "RS",
        /// Seychelles.
        Sc = "SC",
        /// Sierra Leone.
        Sl = "SL",
        /// Singapore.
        Sg = "SG",
        /// Sint Maarten (Dutch part).
        Sx = "SX",
        /// Slovakia.
        Sk = "SK",
        /// Slovenia.
        Si = "SI",
        /// Solomon Islands.
        Sb = "SB",
        /// Somalia.
        So = "SO",
        /// South Africa.
        Za = "ZA",
        /// South Georgia and the South Sandwich Islands.
        Gs = "GS",
        /// South Sudan.
        Ss = "SS",
        /// Spain.
        Es = "ES",
        /// Sri Lanka.
        Lk = "LK",
        /// Sudan.
        Sd = "SD",
        /// Suriname.
        Sr = "SR",
        /// Svalbard and Jan Mayen.
        Sj = "SJ",
        /// Swaziland.
        Sz = "SZ",
        /// Sweden.
        Se = "SE",
        /// Switzerland.
        Ch = "CH",
        /// Syrian Arab Republic.
        Sy = "SY",
        /// Taiwan, Province of China.
        Tw = "TW",
        /// Tajikistan.
        Tj = "TJ",
        /// United Republic of Tanzania.
        Tz = "TZ",
        /// Thailand.
        Th = "TH",
        /// Timor-Leste.
        Tl = "TL",
        /// Togo.
        Tg = "TG",
        /// Tokelau.
        Tk = "TK",
        /// Tonga.
        To = "TO",
        /// Trinidad and Tobago.
        Tt = "TT",
        /// Tunisia.
        Tn = "TN",
        /// Turkey.
        Tr = "TR",
        /// Turkmenistan.
        Tm = "TM",
        /// Turks and Caicos Islands.
        Tc = "TC",
        /// Tuvalu.
        Tv = "TV",
        /// Uganda.
        Ug = "UG",
        /// Ukraine.
        Ua = "UA",
        /// United Arab Emirates.
        Ae = "AE",
        /// United Kingdom.
        Gb = "GB",
        /// United States.
        Us = "US",
        /// United States Minor Outlying Islands.
        Um = "UM",
        /// Uruguay.
        Uy = "UY",
        /// Uzbekistan.
        Uz = "UZ",
        /// Vanuatu.
        Vu = "VU",
        /// Bolivarian Republic of Venezuela.
        Ve = "VE",
        /// Viet Nam.
        Vn = "VN",
        /// British Virgin Islands.
        Vg = "VG",
        /// U.S. Virgin Islands.
        Vi = "VI",
        /// Wallis and Futuna.
        Wf = "WF",
        /// Western Sahara.
        Eh = "EH",
        /// Yemen.
        Ye = "YE",
        /// Zambia.
        Zm = "ZM",
        /// Zimbabwe.
        Zw = "ZW",
    }
}

// A new region means a new variant; update this count along with it.
common::const_assert_usize_eq!(
    <RegionCode as crate::wire::WireEnum>::KNOWN_VARIANTS.len(),
    249,
);

impl RegionCode {
    /// The upper-case ISO 3166-1 alpha-2 code, e.g. `"US"`. `None` if the
    /// region is `Undefined`.
    pub fn alpha2(self) -> Option<&'static str> {
        use crate::wire::WireEnum;
        if self.is_undefined() {
            None
        } else {
            Some(self.as_wire_str())
        }
    }
}

#[cfg(test)]
mod test {
    use common::test_utils::roundtrip;

    use super::*;
    use crate::wire::{WireEnum, decode_str};

    #[test]
    fn every_region_roundtrips() {
        for region in RegionCode::KNOWN_VARIANTS {
            let token = region.alpha2().unwrap();
            assert_eq!(token.len(), 2);
            assert!(token.bytes().all(|b| b.is_ascii_uppercase()));

            let json = format!("\"{token}\"");
            let decoded = decode_str::<RegionCode>(&json).unwrap();
            assert_eq!(decoded, *region);
            assert_eq!(serde_json::to_string(&decoded).unwrap(), json);
        }
    }

    #[test]
    fn unknown_region_is_undefined() {
        let region = decode_str::<RegionCode>(r#""ZZ""#).unwrap();
        assert_eq!(region, RegionCode::Undefined);
        assert_eq!(region.alpha2(), None);

        // Case-sensitive
        let region = decode_str::<RegionCode>(r#""us""#).unwrap();
        assert_eq!(region, RegionCode::Undefined);
    }

    #[test]
    fn region_code_samples() {
        let expected_ser = r#"["AF","AX","US","GB","ZW"]"#;
        roundtrip::json_wire_enum_backwards_compat(
            &[
                RegionCode::Af,
                RegionCode::Ax,
                RegionCode::Us,
                RegionCode::Gb,
                RegionCode::Zw,
            ],
            RegionCode::Undefined,
            expected_ser,
        );
    }
}
