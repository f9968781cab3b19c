use crate::types::ClanRecord;

/// One clan of the embedded table: name, id suffix and categories in order
type ClanEntry = (&'static str, &'static str, &'static [(&'static str, &'static [&'static str])]);

/// Clans and totem items from the ethnographic appendix, in table order
///
/// Lists are reproduced as recorded, including the repeated
/// "Turubare kigadureu (pato branco)" under BOKODORI ECERAE.
const CLANS: &[ClanEntry] = &[
    (
        "BOE ETUIEDAGAMAGE",
        "boe_etuiedagamage",
        &[
            (
                "KIEGE",
                &[
                    "Nabure (ararapiranga)",
                    "Batagaje (biguá)",
                    "Korao (papagaio verdadeiro)",
                    "Bakuguma (gavião requinta)",
                    "Metugo (pomba)",
                    "Turubare (pato)",
                    "Kanao Kigadureu",
                    "Mano (gavião)",
                    "Tamigi (anhuma)",
                ],
            ),
            (
                "BAREGE",
                &[
                    "Jugo (queixada)",
                    "Jui (caititu)",
                    "Okwa (lobinho)",
                    "Ipocereu (papa mel)",
                    "Meridabo (furão)",
                    "Moribo (cachorro do mato)",
                    "Kudobo (quati)",
                    "Ipie (ariranha)",
                    "Jomo (lontra)",
                    "Ierarai (mão pelada)",
                    "Aokurumodu (lontra)",
                ],
            ),
            (
                "AWAGE",
                &[
                    "Bakorororeu (cobra coral)",
                    "Arori (cobra coral)",
                    "Aroro (larva de borboleta)",
                    "Aroro Ekureu (lavra de borboleta amarelo)",
                    "Aroro Ewagureu",
                ],
            ),
        ],
    ),
    (
        "AROROE",
        "aroroe",
        &[],
    ),
    (
        "IWAGUDUDOGE",
        "iwagududoge",
        &[
            (
                "BAREGE",
                &[
                    "Akiwa (capivara)",
                    "Akiwareu (rato)",
                    "Kurugo (preá)",
                    "Rie (lobo)",
                    "Arigao coreu (cachorro preto)",
                ],
            ),
            (
                "KARE",
                &[
                    "Araru (piraputanga)",
                    "Ararureuge (tipo de lambari)",
                    "Jarudo Biagareu (bagre pequeno)",
                ],
            ),
            (
                "KIEGE",
                &[
                    "Kujekadureu (mutum fêmea)",
                    "Ceje (gavião fumaça)",
                    "Keago (gavião fumaça castanho)",
                    "Keago Kigadureu",
                    "Mukureabo (curiango)",
                    "Piroje (andorinha)",
                    "Piududu (beija flor)",
                    "Piududu Kudorereu (beija flor parecido com arara azul)",
                    "Piuguriwu",
                    "Ciwajereu",
                    "Warinogo (variedade de gavião)",
                    "Kido (periquito)",
                    "Kidetumana (periquito vassourinha)",
                    "Keao-Keao Kigadureu (grainha)",
                    "Cucu",
                    "Kidoreu (sanhaço)",
                    "Karao",
                    "Aere (mãe da lua)",
                    "Pogubo",
                    "Pobureu (urubu)",
                    "Ciwaje (urubu cangaia)",
                    "Cenao Taotao (gralhão)",
                ],
            ),
        ],
    ),
    (
        "APIBOREGE",
        "apiborege",
        &[
            (
                "KIEGE",
                &[
                    "Aroe Eceba (gavião real)",
                    "Kuruguga (gavião)",
                    "Torowa",
                    "Kuruguga Porireu",
                    "Kuruguga Awarare",
                    "Kuruguga Kudagodoreu",
                    "Kurugugabokwadiare",
                    "Tawie (gaivota)",
                    "Tudu (caburé)",
                    "Beo (siriema)",
                    "Cugui (tucaninho)",
                ],
            ),
            (
                "AWAGE",
                &[
                    "Ikuiemana",
                ],
            ),
            (
                "BAREGE",
                &[
                    "Atomoio (jabuti)",
                    "Bakuie",
                    "Irui (sinimbu)",
                    "Aipoboreu (jaguatirica)",
                ],
            ),
            (
                "KARE",
                &[
                    "Roko (curimbatá)",
                    "Akurara (pacu peba)",
                    "Buruwo (savá)",
                    "Apuie (tipo de lambari pequeno)",
                    "Tubore (lambari)",
                    "Metoe",
                    "Motoreu (sardinha)",
                    "Koduraka",
                    "Atu (madre pérola)",
                    "Aturebo",
                    "Atunabo",
                    "Bakororo kuidabireu",
                ],
            ),
        ],
    ),
    (
        "PAIWOE",
        "paiwoe",
        &[
            (
                "KIEGE",
                &[
                    "Kuido (arara amarelo)",
                    "Keakorogu (ararinha)",
                    "Kuno (papagaio campeiro)",
                    "Ore (periquito estrela)",
                    "Kugu (gavião)",
                    "Bokurowodo",
                    "Kurutui",
                    "Manopa (variedade de ararinha)",
                    "Piabo",
                    "Ciwabo (guachão)",
                    "Ciwabo Batarea Keadureu (chechéu)",
                    "Batagaje (mergulhão bivá)",
                    "Aturuwareu (tipo de bivá)",
                    "Makao (acuã)",
                    "Tagogo (coruja)",
                    "Curui (papagaio urubuzinho)",
                    "Turubare coreu (pato preto)",
                ],
            ),
            (
                "BAREGE",
                &[
                    "Paicoreu (bugio preto)",
                    "Paiparagujagureu (bugio de peito avermelhado)",
                    "Iwe (ouriço)",
                    "Meaibo (macaco barriga)",
                    "Rie (lobo guará)",
                    "Jerigige (jabuti)",
                    "Ato (jabuti grande da mata)",
                    "Buke (tamanduá bandeira)",
                    "Apogo (tamanduá mirin)",
                    "Aimeareu (gato mourisco)",
                    "Mea (cutia)",
                    "Ru (sapo)",
                ],
            ),
            (
                "KARE",
                &[
                    "Orari (pintado)",
                    "Orariji (surubim)",
                    "Poru (jaú)",
                    "Koma (jeripoca)",
                    "Akoro (bico de pato)",
                    "Rureo (palmito)",
                    "Porugogo (tipo de peixe de couro bagre)",
                    "Barubado",
                    "Kudogo (botoado)",
                    "Juireu (variedade de botoado)",
                    "Nowareu (mandi banana)",
                    "Rekudo (chicote)",
                    "Okwaboareu (cascudo)",
                ],
            ),
        ],
    ),
    (
        "BAKORO ECERAE",
        "bakoro_ecerae",
        &[
            (
                "BAREGE",
                &[
                    "Adugo (onça pintada)",
                    "Adugo Coreu (onça preta)",
                    "Okwaru (tatu peba)",
                    "Enokuri (tatu bolinha)",
                    "Jerego (tatu china)",
                ],
            ),
            (
                "KARE",
                &[
                    "Je Kujagureu (piau)",
                    "Jetobo (tipo de piau)",
                    "Aenogwa (tipo de piau)",
                    "Kare Etumana",
                    "Oicereu (matrinchã)",
                    "Buiogo (piranha)",
                    "Buiogo merireu (variedade de piranha)",
                ],
            ),
        ],
    ),
    (
        "BOKODORI ECERAE",
        "bokodori_ecerae",
        &[
            (
                "BAREGE",
                &[
                    "Bokodori (tatu canastra)",
                    "Bokodorireu (tipo de tatu canastra)",
                    "Iturawore (tipo de tatu)",
                    "Okugudo (tipo de tatu)",
                    "Enogikure",
                    "Arigao Kigadureu (cachorro branco)",
                    "Tapiradoge (vaca)",
                    "Kowarodoge (cavalo)",
                    "Jugureuge (porco doméstico)",
                ],
            ),
            (
                "KIEGE",
                &[
                    "Maragatao",
                    "Pogo (Anu branco)",
                    "Kogarigadoge (galinha)",
                    "Kurea Kurea (joão de barro)",
                    "Juregori (tipo de ave pequeno)",
                    "Cibae (arara canindé)",
                    "Turubare kigadureu (pato branco)",
                    "Bataru (joão pinto)",
                    "kagariga kigadureu (galinha branca)",
                    "Turubare kigadureu (pato branco)",
                ],
            ),
            (
                "KARE",
                &[
                    "Koge (Dourado)",
                ],
            ),
        ],
    ),
    (
        "KIE",
        "kie",
        &[
            (
                "BAREGE",
                &[
                    "Ki (anta)",
                    "Apu (paca)",
                    "Pobogo (veado)",
                    "Amo (coelho)",
                    "Upe (cágado)",
                    "Jure (sucuri)",
                    "Jure marido (sucuri tocó)",
                    "Bokodori coreu (tipo de tatu canastra preto)",
                    "Jugo (queixada)",
                ],
            ),
            (
                "KIEGE",
                &[
                    "Apodo oto coreu (tucano do bico preto)",
                    "Apodo (tucano)",
                    "Bataro Coreu (joão pinto preto)",
                    "Buroibe (pavãozinho)",
                    "Kudoro (arara azul)",
                    "Kuritaga (papagaio corneteiro)",
                    "Pari (ema)",
                    "Ó (socó)",
                    "Bai (urubu rei)",
                ],
            ),
            (
                "KARE",
                &[
                    "Kudorowu",
                    "Paretoboreu (tipo de bagre mandi mansão cascudo)",
                    "Butore",
                    "Bai coreu (casa escura)",
                    "Bai kigadureu (casa branca)",
                    "Okoge coreu (tipo de dourado preto)",
                ],
            ),
        ],
    ),
    (
        "BADOJEBA",
        "badojeba",
        &[
            (
                "BAREGE",
                &[
                    "Adugo onaregedu (filhote de onça)",
                    "Rea (tatu galinha)",
                    "Okwa (raposa)",
                    "Uwai (jacaré)",
                ],
            ),
            (
                "KARE",
                &[
                    "Koge Bakororo",
                    "Jatugugo",
                    "Reko",
                    "Uto",
                    "Pobu (pacu)",
                ],
            ),
            (
                "KIEGE",
                &[
                    "Bacekoguio",
                    "Baruge",
                    "Enari",
                    "Keakorogu Ao Baru Kadureu (araçã de cabeça listrada da cor do céu)",
                    "Meri (tié-fogo)",
                    "Ori (anu preto)",
                    "O (tipo de garça)",
                    "Mutum rabo pampa",
                    "Martim pescador",
                    "Barugi (gavião fumaça)",
                ],
            ),
        ],
    ),
];

/// Build the owned clan records of the embedded table
///
/// # Examples
/// ```
/// use bororo_clans::table::embedded_clans;
///
/// let clans = embedded_clans();
/// assert_eq!(clans[0].clan_name, "BOE ETUIEDAGAMAGE");
/// ```
pub fn embedded_clans() -> Vec<ClanRecord> {
    CLANS
        .iter()
        .map(|(clan_name, clan_id, categories)| {
            categories.iter().fold(
                ClanRecord::new(*clan_name, *clan_id),
                |clan, (category, items)| clan.with_category(*category, items.iter().copied()),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clan_order() {
        let ids: Vec<String> = embedded_clans().into_iter().map(|c| c.clan_id).collect();
        assert_eq!(
            ids,
            vec![
                "boe_etuiedagamage",
                "aroroe",
                "iwagududoge",
                "apiborege",
                "paiwoe",
                "bakoro_ecerae",
                "bokodori_ecerae",
                "kie",
                "badojeba",
            ]
        );
    }

    #[test]
    fn test_item_counts() {
        let counts: Vec<usize> = embedded_clans().iter().map(ClanRecord::item_count).collect();
        assert_eq!(counts, vec![25, 0, 30, 28, 42, 12, 20, 24, 19]);
        assert_eq!(counts.iter().sum::<usize>(), 200);
    }

    #[test]
    fn test_aroroe_has_no_categories() {
        let clans = embedded_clans();
        let aroroe = clans.iter().find(|c| c.clan_id == "aroroe").unwrap();
        assert!(aroroe.data.is_empty());
    }

    #[test]
    fn test_category_order_preserved() {
        let clans = embedded_clans();
        let apiborege = clans.iter().find(|c| c.clan_id == "apiborege").unwrap();
        let categories: Vec<&str> = apiborege.data.keys().map(String::as_str).collect();
        assert_eq!(categories, vec!["KIEGE", "AWAGE", "BAREGE", "KARE"]);
    }

    #[test]
    fn test_duplicate_entry_kept() {
        let clans = embedded_clans();
        let bokodori = clans.iter().find(|c| c.clan_id == "bokodori_ecerae").unwrap();
        let duplicates = bokodori.data["KIEGE"]
            .iter()
            .filter(|raw| raw.as_str() == "Turubare kigadureu (pato branco)")
            .count();
        assert_eq!(duplicates, 2);
    }
}
