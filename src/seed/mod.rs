//! Reference data loaded into a fresh store at startup.
//!
//! Populates one professor login, the three advising professors, the eight
//! themed projects (each with its eleven-week schedule) and the opening
//! notifications. Running it twice duplicates every row under new ids.

pub mod semester;

use tracing::info;

use crate::entity::{
    NotificationPriority, NotificationType, Outline, ScheduleStatus, UserType,
};
use crate::schema::{NewNotification, NewProfessor, NewProject, NewUser, NewWeeklySchedule};
use crate::storage::MemStore;

pub const PROFESSOR_USERNAME: &str = "professor";
pub const PROFESSOR_PASSWORD: &str = "4731v8";

struct ProfessorSeed {
    name: &'static str,
    specialty: &'static str,
    expertise: &'static [&'static str],
    email: &'static str,
}

const PROFESSORS: &[ProfessorSeed] = &[
    ProfessorSeed {
        name: "Gabriel Eduardo",
        specialty: "Back-end & APIs",
        expertise: &["Django", "REST APIs", "PostgreSQL", "Arquitetura de Software"],
        email: "gabriel.eduardo@senai.br",
    },
    ProfessorSeed {
        name: "Guilherme Franco",
        specialty: "Front-end & UI/UX",
        expertise: &["React", "JavaScript", "CSS", "Design System", "Prototipação"],
        email: "guilherme.franco@senai.br",
    },
    ProfessorSeed {
        name: "Silvano",
        specialty: "Banco de Dados & Arquitetura",
        expertise: &["PostgreSQL", "Modelagem de Dados", "Performance", "Arquitetura"],
        email: "silvano@senai.br",
    },
];

const FRONTEND: &str = "HTML, CSS, JavaScript + Bootstrap/Tailwind";

const DELIVERABLES: &[&str] = &[
    "Prototipação UI/UX",
    "Documentação Técnica e Funcional",
    "Projeto Django Funcional",
    "Apresentação Final",
];

struct ProjectSeed {
    title: &'static str,
    description: &'static str,
    theme: u32,
    context: &'static str,
    problem: &'static str,
    backend: &'static str,
    technologies: &'static [&'static str],
    modules: &'static [&'static str],
}

const PROJECTS: &[ProjectSeed] = &[
    ProjectSeed {
        title: "Plataforma de Análise de Dados de Redes Sociais",
        description: "Sistema completo de Social Media Analytics com coleta em tempo real, análise de sentimentos usando NLP, identificação de tendências e sistema de alertas automáticos.",
        theme: 1,
        context: "Empresas e marcas precisam monitorar sua presença digital e compreender a percepção do público nas redes sociais. Atualmente, muitas utilizam planilhas ou ferramentas isoladas, sem automação nem análise inteligente.",
        problem: "O desafio para os alunos será desenvolver uma plataforma completa de análise de redes sociais, capaz de coletar dados em tempo real, analisar sentimentos, identificar tendências e gerar alertas, simulando um sistema profissional de Social Media Analytics.",
        backend: "Django + Django REST Framework + Django Channels + Celery + Redis",
        technologies: &["django", "djangorestframework", "django-channels", "celery", "redis", "tweepy", "textblob", "nltk"],
        modules: &["Integração com Redes Sociais", "Coleta de Dados em Tempo Real", "Análise de Sentimentos", "Identificação de Tendências", "Dashboard Interativo", "Sistema de Alertas"],
    },
    ProjectSeed {
        title: "Portal de Notícias Comunitárias Colaborativo",
        description: "Portal completo para comunidades locais com sistema de publicação, comentários moderados, integração com mapas e API para aplicativos móveis.",
        theme: 2,
        context: "A comunidade local não possui um espaço centralizado para divulgação de notícias, eventos e informações importantes, dificultando a comunicação e engajamento entre moradores e órgãos locais.",
        problem: "O desafio dos alunos será criar um portal de notícias completo, permitindo publicação de artigos, comentários moderados, integração com mapas e API para apps mobile.",
        backend: "Django + Django REST Framework",
        technologies: &["django", "django-rest-framework", "django-taggit", "django-summernote", "pillow", "folium", "geopy"],
        modules: &["Gestão de Usuários", "Publicação de Artigos", "Sistema de Comentários", "Destaques do Dia", "Mapas e Geolocalização", "API REST"],
    },
    ProjectSeed {
        title: "Sistema Completo de Clínica Médica (Morvan HealthCare)",
        description: "Sistema integrado para clínicas com agendamento online, prontuários digitais, emissão de receitas em PDF e dashboards analíticos.",
        theme: 3,
        context: "Muitas clínicas ainda utilizam papel ou sistemas fragmentados, dificultando o gerenciamento de pacientes, agendas, prontuários e relatórios.",
        problem: "O desafio dos alunos será criar um sistema integrado, onde pacientes, médicos, recepcionistas e administradores possam interagir de forma eficiente, com agendamento online, prontuários digitais e relatórios completos, simulando um ambiente de clínica real.",
        backend: "Django + Django REST Framework + Django Allauth + Django Crispy Forms + Django Filter",
        technologies: &["django", "djangorestframework", "reportlab", "django-crispy-forms", "django-filter", "django-allauth", "pandas", "matplotlib", "psycopg2"],
        modules: &["Gestão de Usuários", "Agendamento Online", "Área do Paciente", "Área do Médico", "Área da Recepção", "Relatórios e Dashboards", "API REST"],
    },
    ProjectSeed {
        title: "Sistema de Gestão Escolar Avançado (SENAI School Manager)",
        description: "Plataforma escolar completa com dashboards específicos para cada perfil de usuário, integração com relatórios e exportação de dados acadêmicos.",
        theme: 4,
        context: "Muitas instituições de ensino ainda utilizam sistemas separados para matrículas, notas, frequência e relatórios, o que gera retrabalho, erros e demora na gestão escolar.",
        problem: "A Escola SENAI precisa de um sistema integrado que permita que alunos, professores, secretaria e coordenação tenham acesso a um mesmo ambiente de forma prática e segura. O desafio dos alunos será desenvolver uma plataforma escolar completa, com dashboards específicos para cada perfil de usuário, integração com relatórios e exportação de dados acadêmicos.",
        backend: "Django + Django REST Framework",
        technologies: &["django", "djangorestframework", "django-crispy-forms", "django-filter", "reportlab", "django-import-export", "openpyxl", "psycopg2"],
        modules: &["Gestão de Usuários e Perfis", "Cadastro Escolar", "Gestão Acadêmica", "Dashboards Específicos", "Relatórios e Exportações", "API REST"],
    },
    ProjectSeed {
        title: "Plataforma de Vagas e Recrutamento Inteligente",
        description: "Plataforma de vagas inteligente que centraliza empresas, candidatos, vagas e utiliza algoritmos simples de matching para sugerir candidatos ou oportunidades automaticamente.",
        theme: 5,
        context: "Empresas locais enfrentam dificuldade em encontrar candidatos qualificados e estudantes/profissionais têm dificuldade em identificar oportunidades compatíveis.",
        problem: "O desafio dos alunos será criar uma plataforma de vagas inteligente, que centralize empresas, candidatos, vagas e que utilize algoritmos simples de matching para sugerir candidatos ou oportunidades automaticamente.",
        backend: "Django + Django REST Framework",
        technologies: &["django", "djangorestframework", "django-crispy-forms", "django-filter", "pillow", "scikit-learn", "nltk", "psycopg2"],
        modules: &["Autenticação de Usuários", "Cadastro e Publicação de Vagas", "Sistema de Candidaturas", "Algoritmo de Matching", "Relatórios e Estatísticas", "API REST"],
    },
    ProjectSeed {
        title: "Plataforma de Eventos Acadêmicos",
        description: "Plataforma que centraliza todo o gerenciamento de eventos, permitindo emissão de certificados, avaliação de participantes e organização de fotos/documentação dos eventos.",
        theme: 6,
        context: "A escola realiza diversos eventos acadêmicos, palestras e workshops, mas atualmente não possui um sistema único para gerenciar inscrições, certificados, avaliações e registro de participantes.",
        problem: "O desafio dos alunos será criar uma plataforma que centralize todo o gerenciamento de eventos, permitindo emissão de certificados, avaliação de participantes e organização de fotos/documentação dos eventos.",
        backend: "Django + Django REST Framework",
        technologies: &["django", "django-phonenumber-field", "django-qrcode", "python-decouple", "djangorestframework", "pillow", "psycopg2"],
        modules: &["Gestão de Usuários", "Cadastro e Gerenciamento de Eventos", "Sistema de Inscrição", "Emissão de Certificados", "Avaliação dos Eventos", "Galeria de Fotos"],
    },
    ProjectSeed {
        title: "Sistema de Avaliação de Professores",
        description: "Sistema seguro e confiável para que os alunos possam avaliar o desempenho dos professores de forma anônima, garantindo métricas, dashboards e relatórios comparativos.",
        theme: 7,
        context: "A escola precisa de uma forma estruturada e anônima para que os alunos possam avaliar o desempenho dos professores, permitindo que a coordenação identifique pontos fortes, oportunidades de melhoria e ofereça suporte pedagógico adequado.",
        problem: "O desafio dos alunos será criar um sistema seguro e confiável, garantindo anonimato, métricas, dashboards e relatórios comparativos.",
        backend: "Django + Django REST Framework + Django Guardian",
        technologies: &["django", "django-chartjs", "django-anonymizer", "django-guardian", "djangorestframework", "psycopg2"],
        modules: &["Gestão de Usuários", "Questionários de Avaliação", "Dashboards", "Relatórios", "API REST"],
    },
    ProjectSeed {
        title: "Sistema de Gestão Acadêmica Inteligente",
        description: "Plataforma completa e analítica que combina gestão acadêmica, dashboards interativos e alertas automáticos, com análise preditiva para identificar riscos de evasão.",
        theme: 8,
        context: "A escola necessita de um sistema acadêmico integrado, capaz de gerenciar alunos, turmas, notas e frequência, e ainda prever possíveis riscos de evasão utilizando análise preditiva.",
        problem: "O desafio para os alunos será criar uma plataforma completa e analítica, que combine gestão acadêmica, dashboards interativos e alertas automáticos, simulando um sistema inteligente pronto para uso real.",
        backend: "Django + Django REST Framework + Celery + Redis",
        technologies: &["django", "djangorestframework", "pandas", "scikit-learn", "celery", "redis", "matplotlib", "reportlab", "django-filter", "psycopg2"],
        modules: &["Gestão de Usuários e Perfis", "Cadastro Acadêmico Completo", "Dashboard Analítico", "Módulo Preditivo", "Alertas Automáticos", "API REST", "Relatórios Personalizados"],
    },
];

struct WeekSeed {
    title: &'static str,
    tasks: &'static [&'static str],
    deliverable: &'static str,
    evaluation_criteria: &'static [&'static str],
}

const WEEKS: &[WeekSeed] = &[
    WeekSeed {
        title: "Planejamento Inicial",
        tasks: &["Escolha do tema do projeto", "Análise de requisitos funcionais", "Definição da arquitetura inicial", "Prototipação UI/UX no Figma"],
        deliverable: "Protótipo navegável e documentação inicial",
        evaluation_criteria: &["Clareza na definição do escopo", "Qualidade do protótipo", "Viabilidade técnica", "Documentação de requisitos"],
    },
    WeekSeed {
        title: "Documentação Técnica",
        tasks: &["Diagrama de entidades (DER)", "Casos de uso detalhados", "Manual de instalação", "Estrutura inicial do projeto Django"],
        deliverable: "Documentação técnica completa",
        evaluation_criteria: &["DER bem estruturado", "Casos de uso detalhados", "Manual claro", "Setup funcional"],
    },
    WeekSeed {
        title: "Configuração e Models",
        tasks: &["Configuração do ambiente Django", "Criação dos models principais", "Configuração do banco PostgreSQL", "Migrações e fixtures iniciais"],
        deliverable: "Base do sistema funcionando",
        evaluation_criteria: &["Models bem definidos", "Banco configurado", "Migrações funcionais", "Estrutura organizada"],
    },
    WeekSeed {
        title: "Autenticação e Usuários",
        tasks: &["Sistema de autenticação", "Diferentes perfis de usuário", "Controle de permissões", "Interface de login"],
        deliverable: "Sistema de usuários completo",
        evaluation_criteria: &["Autenticação segura", "Perfis bem definidos", "Permissões funcionais", "Interface intuitiva"],
    },
    WeekSeed {
        title: "Funcionalidades Core",
        tasks: &["Implementação das funcionalidades principais", "CRUD básico", "Interfaces administrativas", "Validações de dados"],
        deliverable: "Funcionalidades principais implementadas",
        evaluation_criteria: &["CRUD funcional", "Validações adequadas", "Interface administrativa", "Código organizado"],
    },
    WeekSeed {
        title: "Interface e UX",
        tasks: &["Templates responsivos", "CSS avançado", "JavaScript interativo", "Melhorias de UX"],
        deliverable: "Interface completa e responsiva",
        evaluation_criteria: &["Design responsivo", "UX intuitiva", "Interatividade", "Consistência visual"],
    },
    WeekSeed {
        title: "Funcionalidades Avançadas",
        tasks: &["Recursos específicos do projeto", "Integrações externas", "Funcionalidades premium", "Otimizações"],
        deliverable: "Recursos avançados implementados",
        evaluation_criteria: &["Funcionalidades únicas", "Integrações funcionais", "Performance", "Inovação"],
    },
    WeekSeed {
        title: "API e Integração",
        tasks: &["API REST completa", "Documentação da API", "Testes automatizados", "Integração com frontend"],
        deliverable: "API REST documentada e funcional",
        evaluation_criteria: &["API bem estruturada", "Documentação clara", "Testes passando", "Integração correta"],
    },
    WeekSeed {
        title: "Testes e Qualidade",
        tasks: &["Testes unitários", "Testes de integração", "Correção de bugs", "Refatoração de código"],
        deliverable: "Sistema testado e refinado",
        evaluation_criteria: &["Cobertura de testes", "Bugs corrigidos", "Código limpo", "Performance otimizada"],
    },
    WeekSeed {
        title: "Documentação Final",
        tasks: &["Manual do usuário", "Guia de instalação", "Documentação técnica", "Preparação da apresentação"],
        deliverable: "Documentação completa e apresentação",
        evaluation_criteria: &["Manual completo", "Guia claro", "Documentação técnica", "Apresentação preparada"],
    },
    WeekSeed {
        title: "Apresentação Final",
        tasks: &["Demo ao vivo", "Defesa do projeto", "Entrega final", "Autoavaliação"],
        deliverable: "Apresentação e defesa do projeto",
        evaluation_criteria: &["Qualidade da apresentação", "Demonstração funcional", "Conhecimento técnico", "Capacidade de defesa"],
    },
];

const NOTIFICATIONS: &[(&str, &str, NotificationType, NotificationPriority)] = &[
    (
        "Entrega próxima",
        "Documentação técnica em 3 dias",
        NotificationType::Deadline,
        NotificationPriority::High,
    ),
    (
        "Feedback disponível",
        "Prototipação UI/UX avaliada",
        NotificationType::Feedback,
        NotificationPriority::Medium,
    ),
    (
        "Nova orientação",
        "Prof. Gabriel - Arquitetura de APIs",
        NotificationType::Announcement,
        NotificationPriority::Medium,
    ),
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Week 1 is already delivered, week 2 is in progress.
fn initial_status(week_number: u32) -> ScheduleStatus {
    match week_number {
        1 => ScheduleStatus::Completed,
        2 => ScheduleStatus::Current,
        _ => ScheduleStatus::Pending,
    }
}

/// Load all reference data into `store`.
pub fn populate(store: &mut MemStore) {
    store.create_user(NewUser {
        username: Some(PROFESSOR_USERNAME.to_string()),
        password: Some(PROFESSOR_PASSWORD.to_string()),
        name: "Professor".to_string(),
        user_type: UserType::Professor,
        github_profile: None,
    });

    for prof in PROFESSORS {
        store.create_professor(NewProfessor {
            name: prof.name.to_string(),
            specialty: prof.specialty.to_string(),
            expertise: strings(prof.expertise),
            avatar: None,
            email: Some(prof.email.to_string()),
        });
    }

    for seed in PROJECTS {
        let project = store.create_project(NewProject {
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            theme: seed.theme,
            context: seed.context.to_string(),
            problem: seed.problem.to_string(),
            architecture: Outline::map([
                ("backend", seed.backend),
                ("database", "PostgreSQL"),
                ("frontend", FRONTEND),
            ]),
            technologies: Outline::list(seed.technologies.iter().copied()),
            modules: Outline::list(seed.modules.iter().copied()),
            deliverables: Outline::list(DELIVERABLES.iter().copied()),
        });
        populate_schedule(store, &project.id);
    }

    for (title, message, notification_type, priority) in NOTIFICATIONS {
        store.create_notification(NewNotification {
            title: title.to_string(),
            message: message.to_string(),
            notification_type: *notification_type,
            priority: Some(*priority),
            is_read: Some(false),
        });
    }

    let stats = store.stats();
    info!(
        projects = stats.projects,
        schedule_items = stats.schedule_items,
        professors = stats.professors,
        notifications = stats.notifications,
        "seeded reference data"
    );
}

fn populate_schedule(store: &mut MemStore, project_id: &str) {
    for (week_number, week) in (1u32..).zip(WEEKS) {
        let (start_date, end_date) = semester::week_dates(week_number);
        store.create_schedule_item(NewWeeklySchedule {
            project_id: Some(project_id.to_string()),
            week_number,
            title: week.title.to_string(),
            start_date,
            end_date,
            tasks: strings(week.tasks),
            deliverable: week.deliverable.to_string(),
            evaluation_criteria: strings(week.evaluation_criteria),
            status: Some(initial_status(week_number)),
        });
    }
}
