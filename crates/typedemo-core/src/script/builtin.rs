//! Scripts shipped with the player, one per demo identifier

use super::models::{LineRecord, Script};

/// Every built-in script keyed by its demo identifier
pub(super) fn all() -> Vec<(&'static str, Script)> {
    vec![
        ("tab", tab()),
        ("chat", chat()),
        ("chat-agent", chat_agent()),
        ("chat-ask", chat_ask()),
        ("chat-manual", chat_manual()),
        ("rules", rules()),
        ("inline", inline()),
        ("context", context()),
        ("mcp", mcp()),
        ("mermaid", mermaid()),
    ]
}

fn tab() -> Script {
    Script::new(vec![
        LineRecord::typed("def fibonacci(", 80),
        LineRecord::emphasized("n):\n    if n <= 1:\n        return n\n    return fibonacci(n-1) + fibonacci(n-2)", 120),
        LineRecord::typed("\n\n// JavaScript로 변경해보세요", 60),
        LineRecord::typed("\nconst users = await fetchUsers();", 100),
        LineRecord::typed("\nconst activeUsers = users.filter(user => user.isActive);", 100),
        LineRecord::typed("\nconst userNames = activeUsers.", 80),
        LineRecord::emphasized("map(user => user.name);", 120),
    ])
}

fn chat_agent() -> Script {
    Script::new(vec![
        LineRecord::typed("💬 사용자 인증 시스템을 만들어줘", 80),
        LineRecord::typed("\nJWT 토큰 사용하고, 로그인/회원가입/로그아웃 기능 필요해", 80),
        LineRecord::typed("\n\n🤖 Agent 모드 활성화...", 60),
        LineRecord::typed("\n📋 작업 분석 중...", 80),
        LineRecord::typed("\n✨ 생성 중: 인증 시스템", 80),
        LineRecord::emphasized("\n\n// 1. JWT 미들웨어 생성", 100),
        LineRecord::emphasized("\nconst jwt = require('jsonwebtoken');", 120),
        LineRecord::emphasized("\n\nconst authMiddleware = (req, res, next) => {", 120),
        LineRecord::emphasized("\n  const token = req.header('Authorization');", 120),
        LineRecord::emphasized("\n  if (!token) return res.status(401).json({ error: 'No token' });", 120),
        LineRecord::emphasized("\n  // 검증 로직...", 100),
        LineRecord::emphasized("\n};", 80),
        LineRecord::typed("\n\n✅ 인증 시스템 완료!", 60),
    ])
}

fn chat_ask() -> Script {
    Script::new(vec![
        LineRecord::typed("💬 이 코드에서 성능 문제가 있을까요?", 80),
        LineRecord::typed("\n\n// 현재 코드", 60),
        LineRecord::typed("\nfunction processUsers(users) {", 100),
        LineRecord::typed("\n  return users.map(user => {", 100),
        LineRecord::typed("\n    return fetchUserDetails(user.id);", 100),
        LineRecord::typed("\n  });", 100),
        LineRecord::typed("\n}", 100),
        LineRecord::typed("\n\n🔍 Ask 모드 분석 결과:", 60),
        LineRecord::typed("\n⚠️ 성능 문제 발견!", 80),
        LineRecord::emphasized("\n\n1. N+1 쿼리 문제", 100),
        LineRecord::emphasized("\n2. 병렬 처리 없음", 100),
        LineRecord::emphasized("\n3. 에러 핸들링 부족", 100),
        LineRecord::typed("\n\n💡 개선 방안:", 80),
        LineRecord::emphasized("\n- Promise.all() 사용", 100),
        LineRecord::emphasized("\n- 배치 처리 구현", 100),
        LineRecord::emphasized("\n- try/catch 추가", 100),
    ])
}

fn chat_manual() -> Script {
    Script::new(vec![
        LineRecord::typed("💬 React 컴포넌트를 TypeScript로 변환해주세요", 80),
        LineRecord::typed("\n단계별로 확인하면서 진행하고 싶습니다", 80),
        LineRecord::typed("\n\n✋ Manual 모드 활성화...", 60),
        LineRecord::typed("\n📋 1단계: Props 인터페이스 정의", 80),
        LineRecord::emphasized("\n\ninterface UserProps {", 100),
        LineRecord::emphasized("\n  id: number;", 100),
        LineRecord::emphasized("\n  name: string;", 100),
        LineRecord::emphasized("\n  email: string;", 100),
        LineRecord::emphasized("\n}", 100),
        LineRecord::typed("\n\n❓ 이 변경사항을 적용하시겠습니까?", 80),
        LineRecord::typed("\n[✅ 승인] [✏️ 수정] [⏭️ 건너뛰기]", 80),
        LineRecord::typed("\n\n✅ 승인됨! 다음 단계로...", 80),
        LineRecord::typed("\n📋 2단계: 컴포넌트 타입 적용", 80),
        LineRecord::emphasized("\n\nconst UserCard: React.FC<UserProps> = ({", 100),
        LineRecord::emphasized("\n  id, name, email", 100),
        LineRecord::emphasized("\n}) => {", 100),
    ])
}

fn chat() -> Script {
    Script::new(vec![
        LineRecord::typed("💬 사용자 인증 시스템을 만들어줘", 80),
        LineRecord::typed("\nJWT 토큰 사용하고, 로그인/회원가입/로그아웃 기능 필요해", 80),
        LineRecord::typed("\n\n🤖 Agent 모드 활성화...", 60),
        LineRecord::typed("\n📋 작업 분석 중...", 80),
        LineRecord::typed("\n✨ 생성 중: 인증 시스템", 80),
        LineRecord::emphasized("\n\n// 1. JWT 미들웨어 생성", 100),
        LineRecord::emphasized("\nconst jwt = require('jsonwebtoken');", 120),
        LineRecord::emphasized("\n\nconst authMiddleware = (req, res, next) => {", 120),
        LineRecord::emphasized("\n  const token = req.header('Authorization');", 120),
        LineRecord::emphasized("\n  if (!token) return res.status(401).json({ error: 'No token' });", 120),
        LineRecord::emphasized("\n  // 검증 로직...", 100),
        LineRecord::emphasized("\n};", 80),
        LineRecord::typed("\n\n✅ 인증 시스템 완료!", 60),
    ])
}

fn rules() -> Script {
    Script::new(vec![
        LineRecord::typed("📝 설정 중: .cursorrules 파일", 80),
        LineRecord::typed("\n\n# Cursor AI Rules Configuration", 100),
        LineRecord::emphasized("\nproject_rules:", 100),
        LineRecord::emphasized("\n  language: \"TypeScript\"", 120),
        LineRecord::emphasized("\n  framework: \"React\"", 120),
        LineRecord::emphasized("\n  styling: \"styled-components\"", 120),
        LineRecord::emphasized("\n  naming_convention: \"camelCase\"", 120),
        LineRecord::emphasized("\n\ncode_standards:", 100),
        LineRecord::emphasized("\n  - \"항상 타입을 명시할 것\"", 120),
        LineRecord::emphasized("\n  - \"함수는 10줄을 넘지 않도록 할 것\"", 120),
        LineRecord::emphasized("\n  - \"컴포넌트는 단일 책임 원칙을 따를 것\"", 120),
        LineRecord::emphasized("\n\nbest_practices:", 100),
        LineRecord::emphasized("\n  - \"useCallback, useMemo 적절히 활용\"", 120),
        LineRecord::emphasized("\n  - \"에러 바운더리 구현\"", 120),
        LineRecord::typed("\n\n✅ Rules 적용 완료!", 60),
        LineRecord::typed("\n🤖 AI가 이제 프로젝트 규칙을 따릅니다", 80),
    ])
}

fn inline() -> Script {
    Script::new(vec![
        LineRecord::whole("function validateEmail(email) {\n    return email.includes('@');\n}", 100),
        LineRecord::typed("\n\n⚡ Cmd+K pressed...", 60),
        LineRecord::typed("\n🤔 Analyzing code...", 80),
        LineRecord::typed("\n✨ Generating improvement...", 80),
        LineRecord::emphasized("\n\nfunction validateEmail(email) {", 120),
        LineRecord::emphasized("\n    const emailRegex = /^[^\\s@]+@[^\\s@]+\\.[^\\s@]+$/;", 120),
        LineRecord::emphasized("\n    return emailRegex.test(email);", 120),
        LineRecord::emphasized("\n}", 100),
    ])
}

fn context() -> Script {
    Script::new(vec![
        LineRecord::typed("💬 @models/User.js @services/authService.js", 100),
        LineRecord::typed("\n사용자 권한 확인 함수를 만들어줘", 80),
        LineRecord::typed("\n\n📁 Loading context files...", 60),
        LineRecord::typed("\n✅ User.js analyzed", 80),
        LineRecord::typed("\n✅ authService.js analyzed", 80),
        LineRecord::typed("\n🧠 Understanding relationships...", 80),
        LineRecord::typed("\n✨ Generating solution...", 60),
        LineRecord::emphasized("\n\nconst checkUserPermission = async (userId, requiredRole) => {", 120),
        LineRecord::emphasized("\n  try {", 100),
        LineRecord::emphasized("\n    const user = await User.findById(userId);", 120),
        LineRecord::emphasized("\n    if (!user) return false;", 100),
        LineRecord::emphasized("\n    \n    return authService.hasPermission(user.role, requiredRole);", 120),
        LineRecord::emphasized("\n  } catch (error) {", 100),
        LineRecord::emphasized("\n    logger.error('Permission check failed', { userId, error });", 120),
        LineRecord::emphasized("\n    return false;", 100),
        LineRecord::emphasized("\n  }\n};", 80),
    ])
}

fn mcp() -> Script {
    Script::new(vec![
        LineRecord::typed("🔧 Configuring MCP Servers...", 80),
        LineRecord::typed("\n\n{", 60),
        LineRecord::emphasized("\n  \"mcpServers\": {", 100),
        LineRecord::emphasized("\n    \"github\": {", 100),
        LineRecord::emphasized("\n      \"command\": \"mcp-server-github\",", 120),
        LineRecord::emphasized("\n      \"args\": [\"--token\", \"$GITHUB_TOKEN\"]", 120),
        LineRecord::emphasized("\n    },", 80),
        LineRecord::emphasized("\n    \"database\": {", 100),
        LineRecord::emphasized("\n      \"command\": \"mcp-server-postgres\",", 120),
        LineRecord::emphasized("\n      \"args\": [\"--connection\", \"$DB_URL\"]", 120),
        LineRecord::emphasized("\n    },", 80),
        LineRecord::emphasized("\n    \"filesystem\": {", 100),
        LineRecord::emphasized("\n      \"command\": \"mcp-server-filesystem\",", 120),
        LineRecord::emphasized("\n      \"args\": [\"--root\", \"./project\"]", 120),
        LineRecord::emphasized("\n    }", 80),
        LineRecord::emphasized("\n  }", 80),
        LineRecord::emphasized("\n}", 60),
        LineRecord::typed("\n\n✅ GitHub connected", 80),
        LineRecord::typed("\n✅ Database connected", 80),
        LineRecord::typed("\n✅ Filesystem connected", 80),
        LineRecord::typed("\n🚀 MCP ready!", 60),
    ])
}

fn mermaid() -> Script {
    Script::new(vec![
        LineRecord::typed("📊 Creating authentication flow diagram...", 80),
        LineRecord::typed("\n\n```mermaid", 100),
        LineRecord::emphasized("\nflowchart TD", 120),
        LineRecord::emphasized("\n    A[로그인 요청] --> B{이메일 검증}", 120),
        LineRecord::emphasized("\n    B -->|유효하지 않음| C[400 Error]", 120),
        LineRecord::emphasized("\n    B -->|유효함| D[사용자 조회]", 120),
        LineRecord::emphasized("\n    D --> E{사용자 존재?}", 120),
        LineRecord::emphasized("\n    E -->|없음| F[401 Error]", 120),
        LineRecord::emphasized("\n    E -->|있음| G[비밀번호 검증]", 120),
        LineRecord::emphasized("\n    G -->|틀림| H[401 Error]", 120),
        LineRecord::emphasized("\n    G -->|맞음| I[JWT 토큰 생성]", 120),
        LineRecord::emphasized("\n    I --> J[토큰 반환]", 120),
        LineRecord::typed("\n```", 100),
        LineRecord::typed("\n\n🎨 Rendering diagram...", 60),
        LineRecord::typed("\n✨ Diagram complete!", 80),
    ])
}
